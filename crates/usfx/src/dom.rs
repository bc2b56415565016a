// ABOUTME: Owned XML element tree built from quick-xml events.
// ABOUTME: Preserves text/tail placement so mixed-content extraction can walk the tree directly.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::ExtractError;

/// One element of the source document.
///
/// `text` is the character data between the element's opening tag and its
/// first child; `tail` is the character data between the element's closing
/// tag and the next sibling. Tail text belongs to the parent's narrative
/// flow, not to the element itself, and the extraction rules depend on that
/// distinction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub tail: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Element::default()
        }
    }

    /// Returns the value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Finds the first descendant (depth-first, document order) matching the
    /// predicate. The element itself is not considered.
    pub fn find<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        for child in &self.children {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find(pred) {
                return Some(found);
            }
        }
        None
    }

    /// Finds the first descendant with the given tag name.
    pub fn find_tag(&self, tag: &str) -> Option<&Element> {
        self.find(|elem| elem.tag == tag)
    }

    /// Collects all descendants with the given tag name, in document order.
    pub fn collect_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.tag == tag {
                out.push(child);
            }
            child.collect_tag(tag, out);
        }
    }
}

/// Parses a whole XML document into an element tree.
///
/// Fails on malformed input; no recovery is attempted.
pub fn parse_document(xml: &str) -> Result<Element, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(element_from_start(e));
            }
            Ok(Event::Empty(ref e)) => {
                let elem = element_from_start(e);
                attach(&mut stack, &mut root, elem)?;
            }
            Ok(Event::End(_)) => {
                let elem = stack
                    .pop()
                    .ok_or_else(|| ExtractError::xml("unexpected closing tag"))?;
                attach(&mut stack, &mut root, elem)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e.decode().map_err(ExtractError::xml)?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(ref e)) => {
                let text = String::from_utf8_lossy(e);
                append_text(&mut stack, &text);
            }
            Ok(Event::GeneralRef(ref e)) => {
                // Entity references the reader reports as standalone events.
                let name = String::from_utf8_lossy(e);
                if let Some(ch) = resolve_reference(&name) {
                    append_text(&mut stack, &ch.to_string());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declaration, comments, doctype, processing instructions
            Err(err) => return Err(ExtractError::xml(err)),
        }
    }

    if !stack.is_empty() {
        return Err(ExtractError::xml("document ended with unclosed elements"));
    }
    root.ok_or_else(|| ExtractError::xml("document has no root element"))
}

/// Builds an element from an opening tag, capturing its attributes.
fn element_from_start(e: &BytesStart) -> Element {
    let mut elem = Element::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes().flatten() {
        elem.attrs.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            String::from_utf8_lossy(&attr.value).into_owned(),
        ));
    }
    elem
}

/// Attaches a finished element to its parent, or installs it as the root.
fn attach(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    elem: Element,
) -> Result<(), ExtractError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(elem);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(elem);
            Ok(())
        }
        None => Err(ExtractError::xml("document has multiple root elements")),
    }
}

/// Appends character data at the current cursor: the open element's leading
/// text if it has no children yet, otherwise the last child's tail.
fn append_text(stack: &mut [Element], text: &str) {
    let Some(open) = stack.last_mut() else {
        return; // whitespace around the root element
    };
    match open.children.last_mut() {
        Some(last) => last.tail.get_or_insert_with(String::new).push_str(text),
        None => open.text.get_or_insert_with(String::new).push_str(text),
    }
}

/// Resolves a predefined or numeric character reference.
fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
