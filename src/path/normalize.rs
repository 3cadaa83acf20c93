use super::segment::DOT_DOT;
use super::{InvalidPathError, MalformedPathError, NormalizeError, Segment, SegmentStack, Segments};

/// What a `..` component does to the stack, decided from the stack's shape alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParentStep {
    /// The only entry is a lone literal, so there is nothing to keep before it.
    DiscardAll,
    /// The only entry is the root, and `/..` is still `/`.
    StayAtRoot,
    /// Remove the previous literal along with its trailing separator.
    CancelPrevious,
    /// Nothing concrete to cancel, so `..` becomes a literal of its own.
    PushLiteral,
}

impl ParentStep {
    fn decide(stack: &SegmentStack<'_>) -> ParentStep {
        match (stack.len(), stack.from_top(0)) {
            (0, _) => ParentStep::PushLiteral,
            (1, Some(Segment::Separator)) => ParentStep::StayAtRoot,
            (1, _) => ParentStep::DiscardAll,
            _ if stack.from_top(1).is_some_and(Segment::is_dot_dot) => ParentStep::PushLiteral,
            _ => ParentStep::CancelPrevious,
        }
    }

    fn apply<'a>(self, stack: &mut SegmentStack<'a>) {
        match self {
            ParentStep::DiscardAll => stack.clear(),
            ParentStep::StayAtRoot => (),
            ParentStep::CancelPrevious => stack.pop_pair(),
            ParentStep::PushLiteral => {
                stack.push(Segment::Literal(DOT_DOT));
                stack.push(Segment::Separator);
            },
        }
    }
}

/// A cursor over the raw bytes of a path. Reading past the end yields `\0`, so an embedded nul
/// terminates scanning exactly like the end of the input does.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn at(&self, offset: usize) -> u8 {
        let index = self.pos + offset;
        if index < self.bytes.len() {
            self.bytes[index]
        } else {
            b'\0'
        }
    }

    const fn is_boundary(&self, offset: usize) -> bool {
        matches!(self.at(offset), b'/' | b'\0')
    }

    fn skip_slashes(&mut self) {
        while self.at(0) == b'/' {
            self.pos += 1;
        }
    }

    fn skip_literal(&mut self) {
        while !self.is_boundary(0) {
            self.pos += 1;
        }
    }
}

/// Lexically normalizes a path into the ordered list of segments that need to exist for it to
/// exist. The filesystem is never touched.
///
/// - Runs of `/` collapse into one, and a trailing `/` is dropped.
/// - `.` components are removed.
/// - `..` cancels the literal before it, unless that literal is itself `..`. A leading `..`, with
///   nothing to cancel, is kept as a literal.
///
/// # Errors
/// - [`InvalidPathError`] if the path is empty, or resolves to nothing, to the root alone or to a
///   trailing `..`.
/// - [`MalformedPathError`] if a nul byte appears anywhere before the end of the input.
pub fn normalize(path: &[u8]) -> Result<Segments<'_>, NormalizeError> {
    let slashes = path.iter().filter(|ch| **ch == b'/').count();
    let mut stack = SegmentStack::with_cap(slashes * 2 + 1);
    let mut cur = Cursor {
        bytes: path,
        pos: 0,
    };
    let mut head = 0;

    loop {
        match cur.at(0) {
            b'\0' => break,
            b'/' => {
                stack.push_literal(&path[head..cur.pos]);
                stack.push(Segment::Separator);
                cur.skip_slashes();
                head = cur.pos;
            },
            // Only ever reached at the start of a component, literals are consumed whole below.
            b'.' if cur.is_boundary(1) => {
                cur.pos += 1;
                cur.skip_slashes();
                head = cur.pos;
            },
            b'.' if cur.at(1) == b'.' && cur.is_boundary(2) => {
                cur.pos += 2;
                ParentStep::decide(&stack).apply(&mut stack);
                cur.skip_slashes();
                head = cur.pos;
            },
            _ => cur.skip_literal(),
        }
    }

    if cur.pos != path.len() {
        Err(MalformedPathError)?
    }

    if head < path.len() {
        stack.push_literal(&path[head..]);
    } else if stack.len() == 0 {
        Err(InvalidPathError)?
    }

    if stack.len() > 1 && stack.from_top(0).is_some_and(Segment::is_separator) {
        stack.pop();
    }

    let resolvable = match stack.from_top(0) {
        Some(Segment::Separator) | None => false,
        Some(last) => !last.is_dot_dot(),
    };
    if !resolvable {
        Err(InvalidPathError)?
    }

    Ok(stack.into_segments())
}
