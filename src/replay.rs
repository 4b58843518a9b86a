//! Line-oriented input scripts for the replay binary and tests.
//!
//! One command per line, `#` comments, blank lines ignored:
//!
//! ```text
//! start                 # toolbar: start drawing
//! confirm               # toolbar: confirm point at the view centre
//! finish                # toolbar: finish shape
//! delete                # toolbar: delete drawing
//! add-vertex            # toolbar: insert on the hovered edge
//! delete-vertex         # toolbar: remove the selected vertex
//! key Right shift       # keydown; modifiers: shift, ctrl, alt, caps
//! click 400 300         # pointer down+up at a pixel
//! dblclick 400 300
//! move 410 300          # pointer move
//! tap 400 300           # touch start+end at a pixel
//! drag 400 300          # touch move
//! ```

use crate::engine::MapEngine;
use crate::geometry::Pixel;
use crate::input::{InputEvent, Key, PointerButton};
use crate::map::DrawMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {message}")]
    InvalidArguments { line: usize, message: String },
}

/// One parsed script step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    StartDrawing,
    ConfirmPoint,
    FinishShape,
    DeleteDrawing,
    AddVertex,
    DeleteVertex,
    Event(InputEvent),
}

/// Parses a whole script, reporting the first bad line.
pub fn parse_script(script: &str) -> Result<Vec<Step>, ReplayError> {
    let mut steps = Vec::new();
    for (i, raw) in script.lines().enumerate() {
        let line = i + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        steps.extend(parse_line(text, line)?);
    }
    Ok(steps)
}

fn parse_line(text: &str, line: usize) -> Result<Vec<Step>, ReplayError> {
    let mut parts = text.split_whitespace();
    let command = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    let need_pixel = |args: &[&str]| -> Result<Pixel, ReplayError> {
        if args.len() < 2 {
            return Err(ReplayError::InvalidArguments {
                line,
                message: format!("'{command}' needs an x and y pixel"),
            });
        }
        let parse = |s: &str| {
            s.parse::<f64>().map_err(|_| ReplayError::InvalidArguments {
                line,
                message: format!("'{s}' is not a number"),
            })
        };
        Ok(Pixel::new(parse(args[0])?, parse(args[1])?))
    };

    match command {
        "start" => Ok(vec![Step::StartDrawing]),
        "confirm" => Ok(vec![Step::ConfirmPoint]),
        "finish" => Ok(vec![Step::FinishShape]),
        "delete" => Ok(vec![Step::DeleteDrawing]),
        "add-vertex" => Ok(vec![Step::AddVertex]),
        "delete-vertex" => Ok(vec![Step::DeleteVertex]),
        "key" => {
            let Some(name) = args.first() else {
                return Err(ReplayError::InvalidArguments {
                    line,
                    message: "'key' needs a key name".to_string(),
                });
            };
            let key = parse_key(name).ok_or_else(|| ReplayError::InvalidArguments {
                line,
                message: format!("unknown key '{name}'"),
            })?;
            let mut shift = false;
            let mut ctrl = false;
            let mut alt = false;
            let mut caps_lock = false;
            for modifier in &args[1..] {
                match *modifier {
                    "shift" => shift = true,
                    "ctrl" => ctrl = true,
                    "alt" => alt = true,
                    "caps" => caps_lock = true,
                    other => {
                        return Err(ReplayError::InvalidArguments {
                            line,
                            message: format!("unknown modifier '{other}'"),
                        });
                    }
                }
            }
            Ok(vec![Step::Event(InputEvent::KeyDown {
                key,
                shift,
                ctrl,
                alt,
                caps_lock,
            })])
        }
        "click" => {
            let pixel = need_pixel(&args)?;
            Ok(vec![
                Step::Event(InputEvent::PointerDown {
                    pixel,
                    button: PointerButton::Primary,
                }),
                Step::Event(InputEvent::PointerUp {
                    pixel,
                    button: PointerButton::Primary,
                }),
            ])
        }
        "dblclick" => {
            let pixel = need_pixel(&args)?;
            Ok(vec![Step::Event(InputEvent::DoubleClick { pixel })])
        }
        "move" => {
            let pixel = need_pixel(&args)?;
            Ok(vec![Step::Event(InputEvent::PointerMove { pixel })])
        }
        "tap" => {
            let pixel = need_pixel(&args)?;
            Ok(vec![
                Step::Event(InputEvent::TouchStart { pixel }),
                Step::Event(InputEvent::TouchEnd { pixel }),
            ])
        }
        "drag" => {
            let pixel = need_pixel(&args)?;
            Ok(vec![Step::Event(InputEvent::TouchMove { pixel })])
        }
        other => Err(ReplayError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}

fn parse_key(name: &str) -> Option<Key> {
    let key = match name {
        "Up" => Key::ArrowUp,
        "Down" => Key::ArrowDown,
        "Left" => Key::ArrowLeft,
        "Right" => Key::ArrowRight,
        "Enter" => Key::Enter,
        "Space" => Key::Space,
        "Delete" => Key::Delete,
        "Backspace" => Key::Backspace,
        "Escape" => Key::Escape,
        other => {
            let mut chars = other.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Key::Char(c)
        }
    };
    Some(key)
}

/// Applies parsed steps to a draw map in order.
pub fn run<E: MapEngine>(map: &mut DrawMap<E>, steps: &[Step]) {
    for step in steps {
        match step {
            Step::StartDrawing => map.press_start_drawing(),
            Step::ConfirmPoint => map.press_confirm_point(),
            Step::FinishShape => map.press_finish_shape(),
            Step::DeleteDrawing => map.press_delete_drawing(),
            Step::AddVertex => map.press_add_vertex(),
            Step::DeleteVertex => map.press_delete_vertex(),
            Step::Event(event) => map.handle_event(*event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comments_and_blanks() {
        let steps = parse_script("# a comment\n\nstart\nconfirm # trailing\n").unwrap();
        assert_eq!(steps, vec![Step::StartDrawing, Step::ConfirmPoint]);
    }

    #[test]
    fn click_expands_to_down_and_up() {
        let steps = parse_script("click 10 20\n").unwrap();
        assert_eq!(steps.len(), 2);
        assert!(matches!(
            steps[0],
            Step::Event(InputEvent::PointerDown { .. })
        ));
        assert!(matches!(steps[1], Step::Event(InputEvent::PointerUp { .. })));
    }

    #[test]
    fn key_with_modifiers() {
        let steps = parse_script("key Right shift\n").unwrap();
        assert_eq!(
            steps,
            vec![Step::Event(InputEvent::KeyDown {
                key: Key::ArrowRight,
                shift: true,
                ctrl: false,
                alt: false,
                caps_lock: false,
            })]
        );
    }

    #[test]
    fn unknown_command_reports_line() {
        let err = parse_script("start\nwobble\n").unwrap_err();
        match err {
            ReplayError::UnknownCommand { line, command } => {
                assert_eq!(line, 2);
                assert_eq!(command, "wobble");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn bad_pixel_reports_message() {
        let err = parse_script("tap ten 20\n").unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }
}
