//! Keyboard Navigation
//!
//! Index arithmetic for the tab bar and the accordion headers.

/// `index + delta`, wrapped into `0..len`
pub fn wrap_index(index: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    Some((((index as isize + delta) % len + len) % len) as usize)
}

/// Tab to activate for a key press on tab `index`
pub fn tab_target(key: &str, index: usize, len: usize) -> Option<usize> {
    match key {
        "ArrowRight" => wrap_index(index, 1, len),
        "ArrowLeft" => wrap_index(index, -1, len),
        _ => None,
    }
}

/// What a key press on an accordion header does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionKey {
    /// Open or close this header's panel
    Toggle,
    /// Move focus to another header
    Focus(usize),
}

pub fn accordion_key(key: &str, shift: bool, index: usize, len: usize) -> Option<AccordionKey> {
    match key {
        "Enter" | " " => Some(AccordionKey::Toggle),
        "ArrowDown" => wrap_index(index, 1, len).map(AccordionKey::Focus),
        "ArrowUp" => wrap_index(index, -1, len).map(AccordionKey::Focus),
        "Home" => wrap_index(0, 0, len).map(AccordionKey::Focus),
        "End" => len.checked_sub(1).map(AccordionKey::Focus),
        // Tab cycles headers instead of leaving the widget
        "Tab" if shift => wrap_index(index, -1, len).map(AccordionKey::Focus),
        "Tab" => wrap_index(index, 1, len).map(AccordionKey::Focus),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, -1, 3), Some(2));
        assert_eq!(wrap_index(2, 1, 3), Some(0));
        assert_eq!(wrap_index(1, 1, 3), Some(2));
        assert_eq!(wrap_index(0, 1, 0), None);
    }

    #[test]
    fn test_tab_target() {
        assert_eq!(tab_target("ArrowRight", 1, 2), Some(0));
        assert_eq!(tab_target("ArrowLeft", 0, 2), Some(1));
        assert_eq!(tab_target("Enter", 0, 2), None);
    }

    #[test]
    fn test_accordion_keys() {
        assert_eq!(accordion_key("Enter", false, 1, 4), Some(AccordionKey::Toggle));
        assert_eq!(accordion_key(" ", false, 1, 4), Some(AccordionKey::Toggle));
        assert_eq!(accordion_key("ArrowDown", false, 3, 4), Some(AccordionKey::Focus(0)));
        assert_eq!(accordion_key("ArrowUp", false, 0, 4), Some(AccordionKey::Focus(3)));
        assert_eq!(accordion_key("Home", false, 2, 4), Some(AccordionKey::Focus(0)));
        assert_eq!(accordion_key("End", false, 0, 4), Some(AccordionKey::Focus(3)));
        assert_eq!(accordion_key("Tab", false, 1, 4), Some(AccordionKey::Focus(2)));
        assert_eq!(accordion_key("Tab", true, 1, 4), Some(AccordionKey::Focus(0)));
        assert_eq!(accordion_key("x", false, 1, 4), None);
        assert_eq!(accordion_key("End", false, 0, 0), None);
    }
}
