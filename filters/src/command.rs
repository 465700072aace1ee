//! Command matching: `<prefix><command>[@botname] [args...]` in a message's text or caption.

use dbot_core::{Context, Message, Update};

use crate::filter::{BoxFilter, Filter};

/// Matches messages invoking one of `commands` behind one of `prefixes`.
#[derive(Debug, Clone)]
pub struct CommandFilter {
    commands: Vec<String>,
    prefixes: Vec<String>,
    case_sensitive: bool,
}

impl CommandFilter {
    /// Without prefixes the empty prefix is used, so the text must start with the command itself.
    pub fn new<C, S, P, Q>(commands: C, prefixes: P, case_sensitive: bool) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        P: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        let commands = commands
            .into_iter()
            .map(Into::into)
            .filter(|c: &String| !c.is_empty())
            .map(|c| if case_sensitive { c } else { c.to_lowercase() })
            .collect();
        let mut prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        if prefixes.is_empty() {
            prefixes.push(String::new());
        }
        Self {
            commands,
            prefixes,
            case_sensitive,
        }
    }

    /// Command name followed by its shell-split arguments, if the message invokes
    /// one of the configured commands.
    pub fn parse(&self, ctx: &Context, message: &Message) -> Option<Vec<String>> {
        let text = message.text_or_caption()?;
        for prefix in &self.prefixes {
            let Some(rest) = text.strip_prefix(prefix.as_str()) else {
                continue;
            };
            for command in &self.commands {
                let Some(after) = strip_word(rest, command, self.case_sensitive) else {
                    continue;
                };
                let after = strip_mention(after, ctx.bot_username());
                if after.is_empty() || after.starts_with(char::is_whitespace) {
                    let mut tokens = vec![command.clone()];
                    tokens.extend(shell_split(after));
                    return Some(tokens);
                }
            }
        }
        None
    }
}

impl Filter for CommandFilter {
    fn check(&self, ctx: &Context, update: &Update) -> bool {
        update
            .as_message()
            .is_some_and(|m| self.parse(ctx, m).is_some())
    }

    fn name(&self) -> &str {
        "Command"
    }
}

/// Command filter, see [`CommandFilter::new`].
pub fn command<C, S, P, Q>(commands: C, prefixes: P, case_sensitive: bool) -> BoxFilter
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
    P: IntoIterator<Item = Q>,
    Q: Into<String>,
{
    BoxFilter::new(CommandFilter::new(commands, prefixes, case_sensitive))
}

/// Splits a slash-command text into tokens, dropping the `/` and any `@botname`
/// suffix from the command. `None` if the text is not a slash command.
pub fn slash_command_tokens(text: &str) -> Option<Vec<String>> {
    let rest = text.strip_prefix('/')?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return None;
    }
    let mut tokens = shell_split(rest);
    if let Some(first) = tokens.first_mut() {
        if let Some((name, _)) = first.split_once('@') {
            *first = name.to_string();
        }
    }
    Some(tokens)
}

/// Shell-like splitting: whitespace separates tokens, single and double quotes group them.
pub fn shell_split(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut quoted = false;

    for ch in input.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                quoted = true;
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() || quoted {
                    args.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            None => current.push(ch),
        }
    }

    if !current.is_empty() || quoted {
        args.push(current);
    }

    args
}

/// Strips `word` from the start of `text`, comparing case-insensitively unless asked not to.
fn strip_word<'t>(text: &'t str, word: &str, case_sensitive: bool) -> Option<&'t str> {
    if case_sensitive {
        return text.strip_prefix(word);
    }
    let mut chars = text.char_indices();
    for expected in word.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}

fn strip_mention<'t>(text: &'t str, bot_username: Option<&str>) -> &'t str {
    let Some(username) = bot_username.filter(|u| !u.is_empty()) else {
        return text;
    };
    text.strip_prefix('@')
        .and_then(|rest| strip_word(rest, username, false))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_split_quotes() {
        assert_eq!(
            shell_split(r#"a "b c" 'd e' f"#),
            vec!["a", "b c", "d e", "f"]
        );
        assert_eq!(shell_split(r#"x "" y"#), vec!["x", "", "y"]);
        assert!(shell_split("   ").is_empty());
    }

    #[test]
    fn test_strip_word_case_insensitive() {
        assert_eq!(strip_word("START now", "start", false), Some(" now"));
        assert_eq!(strip_word("START now", "start", true), None);
        assert_eq!(strip_word("st", "start", false), None);
    }

    #[test]
    fn test_slash_command_tokens() {
        assert_eq!(
            slash_command_tokens("/start@my_bot ref 42"),
            Some(vec!["start".to_string(), "ref".to_string(), "42".to_string()])
        );
        assert_eq!(slash_command_tokens("hello"), None);
        assert_eq!(slash_command_tokens("/"), None);
        assert_eq!(slash_command_tokens("/ start"), None);
    }
}
