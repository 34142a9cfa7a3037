use std::{collections::HashMap, str::FromStr, time::Duration};

use color_eyre::eyre::{eyre, Result, WrapErr};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{action::Action, cli::Cli, game::Bounds};

const KEYBINDINGS: [(&str, &str); 4] =
    [("<space>", "Jump"), ("<r>", "Restart"), ("<shift-r>", "Restart"), ("<ctrl-c>", "Quit")];

#[derive(Clone, Debug)]
pub struct Config {
    pub bounds: Bounds,
    pub tick_interval: Duration,
    pub keybindings: KeyBindings,
}

impl Config {
    pub fn new(cli: &Cli) -> Result<Self> {
        Ok(Self {
            bounds: Bounds::new(cli.width, cli.height),
            tick_interval: Duration::from_secs_f64(1.0 / f64::from(cli.fps)),
            keybindings: KeyBindings::new(&KEYBINDINGS)?,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    pub fn new(raw: &[(&str, &str)]) -> Result<Self> {
        raw.iter()
            .map(|(key_str, action_str)| {
                let action = Action::from_str(action_str).wrap_err_with(|| format!("Unknown action `{action_str}`"))?;
                Ok((parse_key_event(key_str)?, action))
            })
            .collect::<Result<HashMap<_, _>>>()
            .map(KeyBindings)
    }

    /// Looks a key up by code and modifiers only, ignoring press kind and keyboard state flags.
    pub fn get(&self, key: &KeyEvent) -> Option<&Action> {
        self.0.get(&KeyEvent::new(key.code, key.modifiers))
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(eyre!("Unable to parse `{}`", raw));
    }
    let raw = raw.trim_start_matches('<').trim_end_matches('>');

    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            },
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            },
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            },
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(raw: &str, modifiers: KeyModifiers) -> Result<KeyEvent> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "up" => KeyCode::Up,
        "space" => KeyCode::Char(' '),
        c if c.chars().count() == 1 => {
            let c = c.chars().next().ok_or_else(|| eyre!("Unable to parse {raw}"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                KeyCode::Char(c.to_ascii_uppercase())
            } else {
                KeyCode::Char(c)
            }
        },
        _ => return Err(eyre!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}
