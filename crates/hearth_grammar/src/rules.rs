//! Terminal and composite grammar rules.
//!
//! Every rule exposes one capability: try to advance the parse against the
//! shared context. Terminal rules match fixed vocabulary (or, for
//! [`DeviceRule`], an alternation built at interpret time from the device
//! snapshot); composite rules sequence sub-rules with hard gates, soft
//! attempts, and the punctuation-or-parameter fallback reparse.
//!
//! The composition order is fixed; the grammar is extended by adding rule
//! types, never by reordering.

use hearth_foundation::{ActionKind, ActionParams};

use crate::context::ParseContext;
use crate::matcher::{match_literal, prefix_len};
use crate::scan::{scan_duration, scan_time_period};
use crate::vocabulary;

/// A unit of the grammar: tests and optionally consumes a prefix of the
/// remaining command text.
pub trait Rule {
    /// The rule's name as it appears in the parse trace.
    fn name(&self) -> &'static str;

    /// Attempts to match at the context's cursor, consuming on success.
    fn interpret(&self, ctx: &mut ParseContext) -> bool;
}

/// Matches a fixed table and records the attempt in the trace.
fn match_table(name: &'static str, table: &[&str], ctx: &mut ParseContext) -> Option<String> {
    let matched = match_literal(table, ctx);
    ctx.record(name, matched.is_some(), matched.as_deref());
    matched
}

// =============================================================================
// Terminal rules
// =============================================================================

/// Optional greeting word before the assistant name: `hi | hey | hello`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterjectionRule;

impl Rule for InterjectionRule {
    fn name(&self) -> &'static str {
        "interjection"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        if let Some(literal) = match_table(self.name(), vocabulary::GREETINGS, ctx) {
            ctx.greeting = Some(literal);
            true
        } else {
            false
        }
    }
}

/// The assistant name a command must be addressed to.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssistantRule;

impl Rule for AssistantRule {
    fn name(&self) -> &'static str {
        "assistant"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        if let Some(literal) = match_table(self.name(), vocabulary::ASSISTANT_NAMES, ctx) {
            ctx.assistant = Some(literal);
            true
        } else {
            false
        }
    }
}

/// A punctuation terminator: `! , ; .`
#[derive(Clone, Copy, Debug, Default)]
pub struct PunctuationRule;

impl Rule for PunctuationRule {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        match_table(self.name(), vocabulary::PUNCTUATION, ctx).is_some()
    }
}

/// An action verb; writes [`ActionKind`] on match.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionVerbRule;

impl Rule for ActionVerbRule {
    fn name(&self) -> &'static str {
        "action-verb"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        if let Some(literal) = match_table(self.name(), vocabulary::ACTION_VERBS, ctx) {
            ctx.action = ActionKind::from_verb(&literal);
            true
        } else {
            false
        }
    }
}

/// An article before the device name: `a | an | the | my`. Noise, ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArticleRule;

impl Rule for ArticleRule {
    fn name(&self) -> &'static str {
        "article"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        match_table(self.name(), vocabulary::ARTICLES, ctx).is_some()
    }
}

/// A preposition opening the trailing parameter clause.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrepositionRule;

impl Rule for PrepositionRule {
    fn name(&self) -> &'static str {
        "preposition"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        match_table(self.name(), vocabulary::PREPOSITIONS, ctx).is_some()
    }
}

/// The dynamic device-name terminal.
///
/// The alternation is built from the context's device snapshot at interpret
/// time, in registration order; the first listed nickname matching at the
/// cursor wins. Nicknames are assumed mutually prefix-free, so the tie-break
/// never decides between genuine alternatives. On match both the nickname
/// (registry spelling) and the capability tag come from the same snapshot
/// entry, so resolution cannot miss.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeviceRule;

impl Rule for DeviceRule {
    fn name(&self) -> &'static str {
        "device"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        let devices = ctx.devices().clone();
        for candidate in &devices {
            if let Some(len) = prefix_len(&candidate.nickname, ctx.remaining()) {
                let literal = ctx.remaining()[..len].to_string();
                ctx.consume(len);
                ctx.device_nickname = Some(candidate.nickname.clone());
                ctx.device_kind = Some(candidate.kind);
                ctx.record(self.name(), true, Some(&literal));
                return true;
            }
        }
        ctx.record(self.name(), false, None);
        false
    }
}

/// The numeric duration form of the parameter clause.
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationRule;

impl Rule for DurationRule {
    fn name(&self) -> &'static str {
        "duration"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        if let Some(len) = scan_duration(ctx.remaining()) {
            let literal = ctx.remaining()[..len].to_string();
            ctx.consume(len);
            ctx.params = ActionParams::duration(literal.clone());
            ctx.record(self.name(), true, Some(&literal));
            true
        } else {
            ctx.record(self.name(), false, None);
            false
        }
    }
}

/// The schedule form of the parameter clause.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimePeriodRule;

impl Rule for TimePeriodRule {
    fn name(&self) -> &'static str {
        "time-period"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        if let Some(len) = scan_time_period(ctx.remaining()) {
            let literal = ctx.remaining()[..len].to_string();
            ctx.consume(len);
            ctx.params = ActionParams::time_period(literal.clone());
            ctx.record(self.name(), true, Some(&literal));
            true
        } else {
            ctx.record(self.name(), false, None);
            false
        }
    }
}

// =============================================================================
// Composite rules
// =============================================================================

/// Duration or time-period, never both: the duration form is tried first
/// and the schedule form only when it fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParamsRule {
    duration: DurationRule,
    time_period: TimePeriodRule,
}

impl ParamsRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for ParamsRule {
    fn name(&self) -> &'static str {
        "params"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        self.duration.interpret(ctx) || self.time_period.interpret(ctx)
    }
}

/// The greeting clause: optional interjection, then the assistant name and
/// its punctuation, both mandatory.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreetingRule {
    interjection: InterjectionRule,
    assistant: AssistantRule,
    punctuation: PunctuationRule,
}

impl GreetingRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for GreetingRule {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        // The interjection is noise; attempted so it is consumed and traced,
        // but its result does not gate anything.
        self.interjection.interpret(ctx);

        let mut matched = self.assistant.interpret(ctx);

        // Punctuation is only meaningful after an assistant name.
        if matched {
            matched = self.punctuation.interpret(ctx);
        }

        matched
    }
}

/// The action clause: verb, optional article, device, and a terminator that
/// is either immediate punctuation or a preposition + parameter clause
/// followed by punctuation.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionClauseRule {
    verb: ActionVerbRule,
    article: ArticleRule,
    device: DeviceRule,
    punctuation: PunctuationRule,
    preposition: PrepositionRule,
    params: ParamsRule,
}

impl ActionClauseRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for ActionClauseRule {
    fn name(&self) -> &'static str {
        "action"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        if !self.verb.interpret(ctx) {
            return false;
        }

        // The article is noise; its absence gates nothing.
        self.article.interpret(ctx);

        if !self.device.interpret(ctx) {
            return false;
        }

        let mut matched = self.punctuation.interpret(ctx);

        // No terminator right after the device name: the command may carry a
        // trailing parameter clause instead. Whether or not that clause
        // matches, the terminator is re-attempted and the second attempt's
        // result is final.
        if !matched {
            if self.preposition.interpret(ctx) {
                self.params.interpret(ctx);
            }
            matched = self.punctuation.interpret(ctx);
        }

        matched
    }
}

/// The root rule: greeting clause then action clause, both mandatory.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandRule {
    greeting: GreetingRule,
    action: ActionClauseRule,
}

impl CommandRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for CommandRule {
    fn name(&self) -> &'static str {
        "command"
    }

    fn interpret(&self, ctx: &mut ParseContext) -> bool {
        self.greeting.interpret(ctx) && self.action.interpret(ctx)
    }
}
