//! Line-oriented host event scripts.
//!
//! One event per line. Blank lines and `#` comments are skipped.
//!
//! ```text
//! on                      # setKioskActive(true)
//! off                     # setKioskActive(false)
//! call <method> [bool]    # raw method call, e.g. setDetoxActive true
//! key <class> [down|up]   # key event, press by default
//! pause                   # app paused
//! leave                   # user is leaving the app
//! ```
//!
//! Key classes: `back`, `home`, `app-switch`, `menu`, `power`, `volume-up`,
//! `volume-down`, `incoming-call`, `end-call`, or a numeric platform code.

use lockdown_app::HostEvent;
use lockdown_core::{InputEvent, KeyClass, KeyPhase, LifecycleSignal, MethodCall};
use thiserror::Error;

/// Script parse failure, with the 1-based line number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// First word is not a known command.
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand {
        /// Line number
        line: usize,
        /// Offending word
        command: String,
    },

    /// Key class not recognised.
    #[error("line {line}: unknown key {key:?}")]
    UnknownKey {
        /// Line number
        line: usize,
        /// Offending word
        key: String,
    },

    /// Argument present but malformed.
    #[error("line {line}: expected {expected}, found {found:?}")]
    InvalidArgument {
        /// Line number
        line: usize,
        /// What was expected
        expected: &'static str,
        /// What was found
        found: String,
    },

    /// Required argument absent.
    #[error("line {line}: missing {expected}")]
    MissingArgument {
        /// Line number
        line: usize,
        /// What was expected
        expected: &'static str,
    },
}

/// Parse a whole script into host events.
pub fn parse(source: &str) -> Result<Vec<HostEvent>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let content = raw.split('#').next().unwrap_or_default().trim();
            (!content.is_empty()).then(|| parse_line(index + 1, content))
        })
        .collect()
}

fn parse_line(line: usize, content: &str) -> Result<HostEvent, ScriptError> {
    let mut words = content.split_whitespace();
    let command = words.next().unwrap_or_default();

    let event = match command {
        "on" => HostEvent::Call(MethodCall::set_active(true)),
        "off" => HostEvent::Call(MethodCall::set_active(false)),
        "call" => {
            let method =
                words.next().ok_or(ScriptError::MissingArgument { line, expected: "method name" })?;
            let argument = words.next().map(|word| parse_bool(line, word)).transpose()?;
            HostEvent::Call(MethodCall::new(method, argument))
        },
        "key" => {
            let key = words.next().ok_or(ScriptError::MissingArgument { line, expected: "key" })?;
            let class = parse_key(line, key)?;
            let phase = match words.next() {
                None | Some("down") => KeyPhase::Down,
                Some("up") => KeyPhase::Up,
                Some(other) => {
                    return Err(ScriptError::InvalidArgument {
                        line,
                        expected: "down or up",
                        found: other.to_string(),
                    });
                },
            };
            HostEvent::Input(InputEvent { class, phase })
        },
        "pause" => HostEvent::Lifecycle(LifecycleSignal::Paused),
        "leave" => HostEvent::Lifecycle(LifecycleSignal::UserLeaving),
        other => return Err(ScriptError::UnknownCommand { line, command: other.to_string() }),
    };

    if let Some(extra) = words.next() {
        return Err(ScriptError::InvalidArgument {
            line,
            expected: "end of line",
            found: extra.to_string(),
        });
    }

    Ok(event)
}

fn parse_bool(line: usize, word: &str) -> Result<bool, ScriptError> {
    match word {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ScriptError::InvalidArgument {
            line,
            expected: "true or false",
            found: other.to_string(),
        }),
    }
}

fn parse_key(line: usize, word: &str) -> Result<KeyClass, ScriptError> {
    let class = match word {
        "back" => KeyClass::Back,
        "home" => KeyClass::Home,
        "app-switch" => KeyClass::AppSwitch,
        "menu" => KeyClass::Menu,
        "power" => KeyClass::Power,
        "volume-up" => KeyClass::VolumeUp,
        "volume-down" => KeyClass::VolumeDown,
        "incoming-call" => KeyClass::IncomingCall,
        "end-call" => KeyClass::EndCall,
        other => match other.parse::<u16>() {
            Ok(code) => KeyClass::Other(code),
            Err(_) => return Err(ScriptError::UnknownKey { line, key: other.to_string() }),
        },
    };
    Ok(class)
}
