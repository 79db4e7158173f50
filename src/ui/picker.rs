use crate::error::{Error, Result};
use crate::ui::events::{KeyAction, ListState, PAGE_SIZE, handle_key};
use crate::ui::{Choice, Picker};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    queue,
    style::{Print, Stylize},
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use tracing::debug;

const NAV_HINT: &str = "Use the arrow keys to navigate: ↓ ↑ → ←";

/// Single-choice list drawn inline on stderr
pub struct TerminalPicker {
    vim_mode: bool,
    decorated: bool,
    page_size: usize,
}

impl TerminalPicker {
    pub fn new(vim_mode: bool, decorated: bool) -> Self {
        Self {
            vim_mode,
            decorated,
            page_size: PAGE_SIZE,
        }
    }

    fn header(&self, prompt: &str) -> String {
        if self.decorated {
            format!("{} {}", "?".blue().bold(), prompt.bold())
        } else {
            format!("? {}", prompt)
        }
    }
}

/// Leaves raw mode and restores the cursor however the picker exits
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = queue!(io::stderr(), cursor::Show);
        let _ = io::stderr().flush();
    }
}

/// Draw the prompt and visible window, returning the number of lines written
fn draw<W: Write>(
    out: &mut W,
    header: &str,
    choices: &[Choice],
    list: &ListState,
    previous: u16,
) -> io::Result<u16> {
    erase(out, previous)?;
    queue!(
        out,
        Print(header),
        Print("\r\n"),
        Print(NAV_HINT),
        Print("\r\n")
    )?;
    let mut lines = 2;
    for i in list.visible() {
        let line = if i == list.cursor() {
            choices[i].active.clone()
        } else {
            format!("  {}", choices[i].inactive)
        };
        queue!(out, Print(line), Print("\r\n"))?;
        lines += 1;
    }
    out.flush()?;
    Ok(lines)
}

fn erase<W: Write>(out: &mut W, lines: u16) -> io::Result<()> {
    if lines > 0 {
        queue!(out, cursor::MoveUp(lines))?;
    }
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown)
    )
}

impl Picker for TerminalPicker {
    fn pick(&mut self, prompt: &str, choices: &[Choice]) -> Result<usize> {
        let mut out = io::stderr();
        let header = self.header(prompt);
        let mut list = ListState::new(choices.len(), self.page_size);

        let _guard = RawModeGuard::enable().map_err(Error::Terminal)?;
        queue!(out, cursor::Hide).map_err(Error::Terminal)?;

        let mut drawn = 0;
        loop {
            drawn = draw(&mut out, &header, choices, &list, drawn).map_err(Error::Terminal)?;

            let key = match event::read().map_err(Error::Terminal)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };

            match handle_key(&mut list, key, self.vim_mode) {
                KeyAction::Continue => {}
                KeyAction::Confirm => {
                    let index = list.cursor();
                    erase(&mut out, drawn).map_err(Error::Terminal)?;
                    queue!(out, Print(&choices[index].selected), Print("\r\n"))
                        .map_err(Error::Terminal)?;
                    out.flush().map_err(Error::Terminal)?;
                    debug!(prompt, index, "Picker confirmed");
                    return Ok(index);
                }
                KeyAction::Abort => {
                    erase(&mut out, drawn).map_err(Error::Terminal)?;
                    out.flush().map_err(Error::Terminal)?;
                    debug!(prompt, "Picker aborted");
                    return Err(Error::Aborted);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(n: usize) -> Vec<Choice> {
        (0..n)
            .map(|i| Choice {
                active: format!("> item-{}", i),
                inactive: format!("item-{}", i),
                selected: format!("ok item-{}", i),
            })
            .collect()
    }

    #[test]
    fn test_draw_counts_lines_and_marks_cursor() {
        let mut out = Vec::new();
        let mut list = ListState::new(3, PAGE_SIZE);
        list.next();

        let lines = draw(&mut out, "? Select Pod", &choices(3), &list, 0).unwrap();
        assert_eq!(lines, 5);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("? Select Pod\r\n"));
        assert!(text.contains("  item-0\r\n"));
        assert!(text.contains("> item-1\r\n"));
        assert!(text.contains("  item-2\r\n"));
    }

    #[test]
    fn test_draw_only_shows_window() {
        let mut out = Vec::new();
        let list = ListState::new(8, PAGE_SIZE);

        let lines = draw(&mut out, "? Select Pod", &choices(8), &list, 0).unwrap();
        assert_eq!(lines, 2 + PAGE_SIZE as u16);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("item-4"));
        assert!(!text.contains("item-5"));
    }

    #[test]
    fn test_plain_header() {
        let picker = TerminalPicker::new(false, false);
        assert_eq!(picker.header("Select Container"), "? Select Container");
    }
}
