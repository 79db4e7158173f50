use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const PAGE_SIZE: usize = 5;

/// What the picker should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Confirm,
    Abort,
}

/// Cursor and scroll window over a list of `len` items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    len: usize,
    size: usize,
    cursor: usize,
    start: usize,
}

impl ListState {
    pub fn new(len: usize, size: usize) -> Self {
        Self {
            len,
            size: size.max(1),
            cursor: 0,
            start: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Indices currently inside the scroll window
    pub fn visible(&self) -> std::ops::Range<usize> {
        self.start..(self.start + self.size).min(self.len)
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
        self.follow_cursor();
    }

    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor();
    }

    pub fn page_down(&mut self) {
        if self.len == 0 {
            return;
        }
        self.cursor = (self.cursor + self.size).min(self.len - 1);
        self.follow_cursor();
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.size);
        self.follow_cursor();
    }

    fn follow_cursor(&mut self) {
        if self.cursor < self.start {
            self.start = self.cursor;
        } else if self.cursor >= self.start + self.size {
            self.start = self.cursor + 1 - self.size;
        }
    }
}

pub fn handle_key(list: &mut ListState, key: KeyEvent, vim_mode: bool) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('d'), KeyModifiers::CONTROL)
        | (KeyCode::Esc, _) => return KeyAction::Abort,
        (KeyCode::Enter, _) => return KeyAction::Confirm,
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => list.next(),
        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => list.prev(),
        (KeyCode::Right, _) | (KeyCode::PageDown, _) => list.page_down(),
        (KeyCode::Left, _) | (KeyCode::PageUp, _) => list.page_up(),
        (KeyCode::Char('j'), KeyModifiers::NONE) if vim_mode => list.next(),
        (KeyCode::Char('k'), KeyModifiers::NONE) if vim_mode => list.prev(),
        (KeyCode::Char('l'), KeyModifiers::NONE) if vim_mode => list.page_down(),
        (KeyCode::Char('h'), KeyModifiers::NONE) if vim_mode => list.page_up(),
        _ => {}
    }
    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_arrow_navigation_stops_at_edges() {
        let mut list = ListState::new(3, PAGE_SIZE);
        handle_key(&mut list, key(KeyCode::Up), false);
        assert_eq!(list.cursor(), 0);
        handle_key(&mut list, key(KeyCode::Down), false);
        handle_key(&mut list, key(KeyCode::Down), false);
        handle_key(&mut list, key(KeyCode::Down), false);
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        let mut list = ListState::new(3, PAGE_SIZE);
        handle_key(&mut list, key(KeyCode::Char('j')), false);
        assert_eq!(list.cursor(), 0);

        handle_key(&mut list, key(KeyCode::Char('j')), true);
        handle_key(&mut list, key(KeyCode::Char('j')), true);
        assert_eq!(list.cursor(), 2);
        handle_key(&mut list, key(KeyCode::Char('k')), true);
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn test_confirm_and_abort() {
        let mut list = ListState::new(2, PAGE_SIZE);
        assert_eq!(
            handle_key(&mut list, key(KeyCode::Enter), false),
            KeyAction::Confirm
        );
        assert_eq!(handle_key(&mut list, ctrl('c'), false), KeyAction::Abort);
        assert_eq!(handle_key(&mut list, ctrl('d'), true), KeyAction::Abort);
        assert_eq!(
            handle_key(&mut list, key(KeyCode::Esc), false),
            KeyAction::Abort
        );
        assert_eq!(
            handle_key(&mut list, key(KeyCode::Char('x')), false),
            KeyAction::Continue
        );
    }

    #[test]
    fn test_window_scrolls_with_cursor() {
        let mut list = ListState::new(12, PAGE_SIZE);
        assert_eq!(list.visible(), 0..5);

        for _ in 0..6 {
            list.next();
        }
        assert_eq!(list.cursor(), 6);
        assert_eq!(list.visible(), 2..7);

        list.page_down();
        assert_eq!(list.cursor(), 11);
        assert_eq!(list.visible(), 7..12);

        list.page_up();
        assert_eq!(list.cursor(), 6);
        assert_eq!(list.visible(), 6..11);
    }

    #[test]
    fn test_short_list_window() {
        let list = ListState::new(2, PAGE_SIZE);
        assert_eq!(list.visible(), 0..2);
    }
}
