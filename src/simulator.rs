use crate::chat_message::ResponseCard;
use crate::locale::Language;

/// Canned reply produced by a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub cards: Vec<ResponseCard>,
}

impl Reply {
    pub fn new(text: impl Into<String>, cards: Vec<ResponseCard>) -> Self {
        Self {
            text: text.into(),
            cards,
        }
    }
}

pub type ReplyBuilder = fn(Language) -> Reply;

/// A keyword predicate paired with the reply it produces.
///
/// Keywords are lower-case; the rule fires when any of them is a substring of
/// the lower-cased query.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    pub respond: ReplyBuilder,
}

impl Rule {
    pub const fn new(id: &'static str, keywords: &'static [&'static str], respond: ReplyBuilder) -> Self {
        Self {
            id,
            keywords,
            respond,
        }
    }

    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords.iter().any(|k| lowered_query.contains(k))
    }
}

/// Result of dispatching a query: the reply plus which rule produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub reply: Reply,
    /// `None` when the query fell through to the default reply.
    pub rule: Option<&'static str>,
}

/// Ordered first-match dispatch table. Order is significant: the first rule
/// whose predicate matches wins, there is no scoring.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: ReplyBuilder,
}

impl RuleTable {
    pub fn new(fallback: ReplyBuilder) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn matching_rule(&self, query: &str) -> Option<&Rule> {
        let lowered = query.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    pub fn dispatch(&self, query: &str, language: Language) -> Dispatch {
        match self.matching_rule(query) {
            Some(rule) => Dispatch {
                reply: (rule.respond)(language),
                rule: Some(rule.id),
            },
            None => Dispatch {
                reply: (self.fallback)(language),
                rule: None,
            },
        }
    }

    /// Maps free text to a canned reply. Every input, including empty or
    /// irrelevant text, maps to some reply.
    pub fn generate(&self, query: &str, language: Language) -> Reply {
        self.dispatch(query, language).reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(_: Language) -> Reply {
        Reply::new("alpha", Vec::new())
    }

    fn beta(_: Language) -> Reply {
        Reply::new("beta", Vec::new())
    }

    fn fallback(language: Language) -> Reply {
        Reply::new(format!("default-{}", language), vec![ResponseCard::generic("Help")])
    }

    fn table() -> RuleTable {
        RuleTable::new(fallback)
            .with_rule(Rule::new("alpha", &["alpha", "first"], alpha))
            .with_rule(Rule::new("beta", &["beta", "first"], beta))
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let dispatch = table().dispatch("the FIRST beta thing", Language::En);
        assert_eq!(dispatch.rule, Some("alpha"));
        assert_eq!(dispatch.reply.text, "alpha");
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        assert_eq!(table().generate("xxBETAxx", Language::En).text, "beta");
    }

    #[test]
    fn test_unmatched_falls_through_to_default() {
        let dispatch = table().dispatch("nothing relevant", Language::Hi);
        assert_eq!(dispatch.rule, None);
        assert_eq!(dispatch.reply.text, "default-hi");
        assert_eq!(dispatch.reply.cards.len(), 1);
    }

    #[test]
    fn test_empty_query_still_gets_reply() {
        assert_eq!(table().generate("", Language::En).text, "default-en");
    }

    #[test]
    fn test_rule_order_is_preserved() {
        let ids: Vec<&str> = table().rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["alpha", "beta"]);
    }
}
