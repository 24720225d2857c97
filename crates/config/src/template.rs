//! `${NAME}` placeholder scanning and substitution.

use std::collections::HashSet;

use crate::env::Environment;

/// One piece of a tokenized template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// Variable name between `${` and the next `}`.
    Placeholder(&'a str),
}

/// Template text split into literal and placeholder segments.
///
/// A placeholder is `${` followed by one or more characters other than `}`
/// and a closing `}`. An unterminated `${` or an empty `${}` stays literal.
/// There is no escaping and no nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(text: &'a str) -> Self {
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut cursor = 0;

        while let Some(found) = text[cursor..].find("${") {
            let name_start = cursor + found + 2;
            let Some(len) = text[name_start..].find('}') else {
                break;
            };
            if len == 0 {
                // `${}` is literal; resume after the brace.
                cursor = name_start + 1;
                continue;
            }
            let open = name_start - 2;
            if literal_start < open {
                segments.push(Segment::Literal(&text[literal_start..open]));
            }
            segments.push(Segment::Placeholder(&text[name_start..name_start + len]));
            cursor = name_start + len + 1;
            literal_start = cursor;
        }

        if literal_start < text.len() {
            segments.push(Segment::Literal(&text[literal_start..]));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Distinct placeholder names in first-occurrence order.
    pub fn placeholders(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .filter_map(|seg| match seg {
                Segment::Placeholder(name) => Some(*name),
                Segment::Literal(_) => None,
            })
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Placeholder names with no value, or an empty value, in `env`.
    pub fn missing(&self, env: &Environment) -> Vec<String> {
        self.placeholders()
            .into_iter()
            .filter(|name| env.resolved(name).is_none())
            .map(str::to_string)
            .collect()
    }

    /// Substitute every placeholder with its value from `env`, or the empty
    /// string when unset.
    pub fn render(&self, env: &Environment) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => out.push_str(env.get(name).unwrap_or_default()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_var() {
        let env = Environment::from_pairs([("MCPGEN_TEST_VAR", "hello")]);
        let tpl = Template::parse("key=${MCPGEN_TEST_VAR}");
        assert_eq!(tpl.render(&env), "key=hello");
    }

    #[test]
    fn unknown_var_renders_empty() {
        let tpl = Template::parse("[${MCPGEN_NONEXISTENT_XYZ}]");
        assert_eq!(tpl.render(&Environment::default()), "[]");
    }

    #[test]
    fn no_placeholders() {
        let tpl = Template::parse("plain text");
        assert_eq!(tpl.segments(), &[Segment::Literal("plain text")]);
        assert!(tpl.placeholders().is_empty());
        assert_eq!(tpl.render(&Environment::default()), "plain text");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let env = Environment::from_pairs([("TOKEN", "t0k")]);
        let tpl = Template::parse("${TOKEN}:${TOKEN}/${TOKEN}");
        assert_eq!(tpl.render(&env), "t0k:t0k/t0k");
    }

    #[test]
    fn placeholders_are_distinct_in_first_seen_order() {
        let tpl = Template::parse("${B} ${A} ${B} ${C} ${A}");
        assert_eq!(tpl.placeholders(), vec!["B", "A", "C"]);
    }

    #[test]
    fn missing_counts_empty_values() {
        let env = Environment::from_pairs([("SET", "x"), ("BLANK", "")]);
        let tpl = Template::parse("${SET}${BLANK}${UNSET}${BLANK}");
        assert_eq!(tpl.missing(&env), vec!["BLANK", "UNSET"]);
    }

    #[test]
    fn malformed_placeholders_stay_literal() {
        let env = Environment::from_pairs([("X", "v")]);
        assert_eq!(Template::parse("${}").render(&env), "${}");
        assert_eq!(Template::parse("${X").render(&env), "${X");
        assert_eq!(Template::parse("$X}").render(&env), "$X}");
        assert_eq!(Template::parse("$${X}").render(&env), "$v");
    }

    #[test]
    fn name_runs_to_first_closing_brace() {
        let tpl = Template::parse("${a{b}c}");
        assert_eq!(
            tpl.segments(),
            &[Segment::Placeholder("a{b"), Segment::Literal("c}")]
        );
    }

    #[test]
    fn names_are_not_trimmed() {
        let env = Environment::from_pairs([("HOST", "h")]);
        let tpl = Template::parse("${ HOST }");
        assert_eq!(tpl.placeholders(), vec![" HOST "]);
        assert_eq!(tpl.render(&env), "");
    }
}
