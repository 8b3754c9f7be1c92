use core::{fmt, str::FromStr};

/// One textual function call, e.g. `RandomInteger(1, 10)`.
///
/// The `${...}` wrapper used by script templates is accepted and stripped;
/// the key keeps any `__` prefix, which the registry understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub key: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error("missing `(` after the function name")]
    MissingOpenParen,

    #[error("missing closing `)`")]
    MissingCloseParen,

    #[error("invalid function name {0:?}")]
    InvalidName(String),
}

impl FromStr for Invocation {
    type Err = InvocationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = raw.trim();
        let text = text
            .strip_prefix("${")
            .and_then(|t| t.strip_suffix('}'))
            .unwrap_or(text)
            .trim();

        let (name, rest) = text
            .split_once('(')
            .ok_or(InvocationError::MissingOpenParen)?;
        let body = rest
            .trim_end()
            .strip_suffix(')')
            .ok_or(InvocationError::MissingCloseParen)?;

        let key = name.trim();
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(InvocationError::InvalidName(key.to_owned()));
        }

        Ok(Self {
            key: key.to_owned(),
            args: split_args(body),
        })
    }
}

/// Splits on unescaped commas. `\,` is a literal comma and `\\` a literal
/// backslash; other escapes are kept as written.
fn split_args(body: &str) -> Vec<String> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let mut args = Vec::new();
    let mut current = String::new();
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next @ (',' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            ',' => args.push(core::mem::take(&mut current).trim().to_owned()),
            _ => current.push(c),
        }
    }
    args.push(current.trim().to_owned());
    args
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&arg.replace('\\', "\\\\").replace(',', "\\,"))?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Invocation {
        raw.parse().unwrap_or_else(|e| panic!("{raw}: {e}"))
    }

    #[test]
    fn plain_call() {
        let inv = parse("RandomInteger(1, 10)");
        assert_eq!(inv.key, "RandomInteger");
        assert_eq!(inv.args, ["1", "10"]);
    }

    #[test]
    fn empty_parens_mean_no_arguments() {
        assert!(parse("RandomDate()").args.is_empty());
        assert!(parse("RandomDate(   )").args.is_empty());
    }

    #[test]
    fn template_wrapper_and_legacy_prefix() {
        let inv = parse("${__RandomChoice(Home,Work,Fax,Cell,Other)}");
        assert_eq!(inv.key, "__RandomChoice");
        assert_eq!(inv.args, ["Home", "Work", "Fax", "Cell", "Other"]);
    }

    #[test]
    fn escaped_commas_stay_in_the_argument() {
        let inv = parse(r"RandomChoice(a\, b, c\\, d)");
        assert_eq!(inv.args, ["a, b", r"c\", "d"]);
    }

    #[test]
    fn empty_arguments_are_kept() {
        let inv = parse("RandomChoice(a,,b)");
        assert_eq!(inv.args, ["a", "", "b"]);
    }

    #[test]
    fn malformed_calls() {
        assert_eq!(
            "RandomInteger".parse::<Invocation>(),
            Err(InvocationError::MissingOpenParen)
        );
        assert_eq!(
            "RandomInteger(1".parse::<Invocation>(),
            Err(InvocationError::MissingCloseParen)
        );
        assert_eq!(
            "(1)".parse::<Invocation>(),
            Err(InvocationError::InvalidName(String::new()))
        );
        assert_eq!(
            "Random Integer(1)".parse::<Invocation>(),
            Err(InvocationError::InvalidName("Random Integer".into()))
        );
    }

    #[test]
    fn display_escapes_commas() {
        let inv = parse(r"RandomChoice(a\,b, c)");
        assert_eq!(inv.to_string(), r"RandomChoice(a\,b, c)");
    }
}
