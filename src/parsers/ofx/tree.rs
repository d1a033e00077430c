/// Nested view of an OFX document.
///
/// OFX in the wild is SGML-ish: leaf tags usually have no closing marker,
/// aggregates usually do, and neither rule is reliable. The tree is built
/// tolerantly — a tag whose content up to the next marker holds no nested
/// marker becomes a `Leaf`, explicit closers pop back to the matching open
/// tag, stray closers are ignored. Lookups are fallible instead of panicking
/// on a missing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfxTree {
    Leaf(String),
    Node(Vec<(String, OfxTree)>),
}

impl OfxTree {
    /// First child with the given tag name, case-insensitive.
    pub fn child(&self, name: &str) -> Option<&OfxTree> {
        match self {
            OfxTree::Leaf(_) => None,
            OfxTree::Node(children) => children
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, tree)| tree),
        }
    }

    /// Every child with the given tag name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a OfxTree> {
        let entries: &[(String, OfxTree)] = match self {
            OfxTree::Leaf(_) => &[],
            OfxTree::Node(children) => children,
        };
        entries
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, tree)| tree)
    }

    /// Descends through one child per path segment; `None` as soon as a
    /// segment is missing or a leaf is reached early.
    pub fn walk(&self, path: &[&str]) -> Option<&OfxTree> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    pub fn leaf_value(&self) -> Option<&str> {
        match self {
            OfxTree::Leaf(value) => Some(value),
            OfxTree::Node(_) => None,
        }
    }
}

struct Frame {
    name: String,
    children: Vec<(String, OfxTree)>,
    text: String,
}

impl Frame {
    fn new(name: String) -> Self {
        Frame {
            name,
            children: Vec::new(),
            text: String::new(),
        }
    }

    fn into_tree(self) -> OfxTree {
        if self.children.is_empty() {
            OfxTree::Leaf(self.text)
        } else {
            // Mixed content loses its text; OFX aggregates carry no values.
            OfxTree::Node(self.children)
        }
    }
}

/// Builds the tree from sanitized text. Never fails — unparseable input
/// just yields a tree the caller's path lookups will miss on.
pub fn parse_tree(text: &str) -> OfxTree {
    let mut stack: Vec<Frame> = vec![Frame::new(String::new())];

    let mut rest = text;
    while let Some(open) = rest.find('<') {
        push_text(&mut stack, &rest[..open]);
        rest = &rest[open + 1..];

        let Some(close) = rest.find('>') else {
            // Dangling '<' with no '>': nothing structural left.
            rest = "";
            break;
        };
        let tag = rest[..close].trim();
        rest = &rest[close + 1..];

        if tag.is_empty() || tag.starts_with('?') || tag.starts_with('!') {
            continue;
        }

        if let Some(closer) = tag.strip_prefix('/') {
            let name = closer.split_whitespace().next().unwrap_or("");
            close_tag(&mut stack, name);
        } else if let Some(empty) = tag.strip_suffix('/') {
            if let (Some(name), Some(top)) = (empty.split_whitespace().next(), stack.last_mut()) {
                top.children
                    .push((name.to_ascii_uppercase(), OfxTree::Leaf(String::new())));
            }
        } else if let Some(name) = tag.split_whitespace().next() {
            open_tag(&mut stack, name);
        }
    }
    push_text(&mut stack, rest);

    while stack.len() > 1 {
        finish_top(&mut stack);
    }
    match stack.pop() {
        Some(root) => OfxTree::Node(root.children),
        None => OfxTree::Node(Vec::new()),
    }
}

fn push_text(stack: &mut [Frame], text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if let Some(top) = stack.last_mut() {
        if !top.text.is_empty() {
            top.text.push(' ');
        }
        top.text.push_str(text);
    }
}

fn open_tag(stack: &mut Vec<Frame>, name: &str) {
    // An open frame holding bare text when the next tag starts is a leaf
    // that never got its closer.
    if stack.len() > 1
        && stack
            .last()
            .is_some_and(|top| top.children.is_empty() && !top.text.is_empty())
    {
        finish_top(stack);
    }
    stack.push(Frame::new(name.to_ascii_uppercase()));
}

fn close_tag(stack: &mut Vec<Frame>, name: &str) {
    // Stray closers (no matching open tag, or the root) are dropped.
    let Some(pos) = stack
        .iter()
        .rposition(|frame| frame.name.eq_ignore_ascii_case(name))
    else {
        return;
    };
    if pos == 0 {
        return;
    }
    while stack.len() > pos {
        finish_top(stack);
    }
}

fn finish_top(stack: &mut Vec<Frame>) {
    if stack.len() < 2 {
        return;
    }
    let Some(frame) = stack.pop() else { return };
    let name = frame.name.clone();
    let tree = frame.into_tree();
    if let Some(parent) = stack.last_mut() {
        parent.children.push((name, tree));
    }
}
