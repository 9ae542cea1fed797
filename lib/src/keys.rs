make_log_macro!(debug, "keys");

const EOT: u8 = 0x04;
const ESC: u8 = 0x1b;

/// A keystroke the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Up or Right arrow
    Increase,
    /// Down or Left arrow
    Decrease,
    /// `q`, newline or end-of-transmission (Ctrl-D)
    Quit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum State {
    #[default]
    Ground,
    /// Saw ESC
    Escape,
    /// Inside `ESC [` or `ESC O`, possibly with parameters (`ESC [ 1 ; 5 A`)
    Sequence,
}

/// Decodes a raw byte stream, one byte at a time, into [`Key`]s.
///
/// Arrow keys arrive as `ESC [ A`..`ESC [ D` (or `ESC O A`..`ESC O D` in
/// application cursor mode). Anything unrecognised is dropped.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: State,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        let key = match (self.state, byte) {
            (State::Ground, b'q' | b'\n' | EOT) => Some(Key::Quit),
            (State::Ground, ESC) => {
                self.state = State::Escape;
                None
            }
            (State::Ground, _) => None,
            (State::Escape, b'[' | b'O') => {
                self.state = State::Sequence;
                None
            }
            (State::Sequence, b'A' | b'C') => {
                self.state = State::Ground;
                Some(Key::Increase)
            }
            (State::Sequence, b'B' | b'D') => {
                self.state = State::Ground;
                Some(Key::Decrease)
            }
            // parameter and intermediate bytes
            (State::Sequence, 0x20..=0x3f) => None,
            // some other final byte, e.g. `~` after Page Up
            (State::Sequence, 0x40..=0x7e) => {
                self.state = State::Ground;
                None
            }
            // not part of a sequence after all
            (State::Escape | State::Sequence, _) => {
                self.state = State::Ground;
                return self.feed(byte);
            }
        };
        if let Some(key) = key {
            debug!("{:?}", key);
        }
        key
    }
}
