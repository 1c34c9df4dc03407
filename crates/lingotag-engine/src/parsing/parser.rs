use super::{
    cursor::Cursor,
    error::ParseError,
    tag::{self, KnownTags, OpenTag, Tag},
    types::Node,
};

/// Name of the synthetic frame at the bottom of the open-tag stack. It is
/// popped implicitly at end of input, never by an explicit closing tag.
const ROOT: &str = "root";

/// Parses tag-marked text into an ordered sequence of [`Node`]s.
///
/// # Arguments
/// - `text`: the already-translated, already-interpolated input string
/// - `tags`: membership capability for the tag names the caller can render
///
/// # Algorithm
/// A single left-to-right scan. Plain text accumulates between tag
/// boundaries; an explicit stack of open-tag frames carries nesting, so
/// depth is bounded only by input length, not the call stack. Each frame
/// owns its children outright and hands them to its parent exactly once,
/// when its closing tag is matched.
///
/// # Errors
/// Returns the first structural defect encountered as a [`ParseError`]; no
/// partial tree is ever produced alongside an error.
pub fn parse(text: &str, tags: &impl KnownTags) -> Result<Vec<Node>, ParseError> {
    let mut stack = vec![OpenTag::new(ROOT)];
    let mut cur = Cursor::new(text);
    let mut text_start = cur.pos();

    // Helper to flush the pending text run into a frame's children
    fn flush_text(children: &mut Vec<Node>, text: &str, start: usize, end: usize) {
        if end > start {
            children.push(Node::Text(text[start..end].to_string()));
        }
    }

    while !cur.eof() {
        if cur.peek() != Some(Tag::OPEN) {
            cur.bump();
            continue;
        }

        let tag_start = cur.pos();
        if cur.peek_at(1).is_none() {
            return Err(ParseError::TagIsIncomplete {
                position: tag_start,
                tag: None,
            });
        }
        let is_closing = cur.peek_at(1) == Some(Tag::SLASH);

        cur.bump(); // <
        if is_closing {
            cur.bump(); // /
        }

        let name_start = cur.pos();
        loop {
            match cur.peek() {
                Some(Tag::CLOSE) => break,
                Some(_) => {
                    cur.bump();
                }
                None => {
                    return Err(ParseError::TagIsIncomplete {
                        position: tag_start,
                        tag: Some(cur.slice_from(name_start).to_string()),
                    });
                }
            }
        }
        let name = cur.slice_from(name_start).to_string();
        cur.bump(); // >

        if !tag::is_valid_name(&name) {
            return Err(ParseError::TagNameIsInvalid {
                position: tag_start,
                name,
            });
        }

        if is_closing {
            let mut closed = stack.pop().expect("root frame is always on the stack");
            // Popping the last frame means an explicit closing tag reached
            // the synthetic root, which it can never match.
            if stack.is_empty() || closed.name != name {
                return Err(ParseError::ClosingTagDoesNotMatchOpeningTag {
                    position: tag_start,
                    name,
                    open_tags: open_names(&stack),
                });
            }
            flush_text(&mut closed.children, text, text_start, tag_start);
            text_start = cur.pos();

            if !tags.is_known(&name) {
                return Err(ParseError::TagIsNotKnown {
                    position: tag_start,
                    name,
                });
            }

            let parent = stack
                .last_mut()
                .expect("a parent frame remains after the root check");
            parent.children.push(Node::Element {
                name: closed.name,
                children: closed.children,
            });
        } else {
            let open = stack
                .last_mut()
                .expect("root frame is always on the stack");
            flush_text(&mut open.children, text, text_start, tag_start);
            text_start = cur.pos();
            stack.push(OpenTag::new(name));
        }
    }

    if stack.len() > 1 {
        return Err(ParseError::NotAllTagsWereClosed {
            position: cur.pos(),
            open_tags: open_names(&stack),
        });
    }

    let mut root = stack.pop().expect("root frame is always on the stack");
    flush_text(&mut root.children, text, text_start, cur.pos());
    Ok(root.children)
}

/// Names of the user frames on the stack, innermost first. The synthetic
/// root frame is not reported.
fn open_names(stack: &[OpenTag]) -> Vec<String> {
    stack.iter().skip(1).rev().map(|t| t.name.clone()).collect()
}
