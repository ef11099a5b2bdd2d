//! Per-call validation context.

use std::fmt::{self, Display};

use ward_core::{format_message, DataKind, DefaultMessages, ErrorId, MessageProvider};

use crate::{Constraint, ValidationResult};

static DEFAULT_MESSAGES: DefaultMessages = DefaultMessages;

/// What a single validation run needs besides the value: its data kind, the
/// member being validated, a display name and the message provider.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub kind: DataKind,
    pub member_name: Option<&'a str>,
    pub display_name: Option<&'a str>,
    pub messages: &'a dyn MessageProvider,
}

impl<'a> ValidationContext<'a> {
    pub fn new(kind: DataKind) -> Self {
        Self {
            kind,
            member_name: None,
            display_name: None,
            messages: &DEFAULT_MESSAGES,
        }
    }

    pub fn with_member(mut self, member_name: &'a str) -> Self {
        self.member_name = Some(member_name);
        self
    }

    pub fn with_display_name(mut self, display_name: &'a str) -> Self {
        self.display_name = Some(display_name);
        self
    }

    pub fn with_messages(mut self, messages: &'a dyn MessageProvider) -> Self {
        self.messages = messages;
        self
    }

    /// The name used in messages: display name, then member name, then
    /// "Value".
    pub fn subject(&self) -> &str {
        self.display_name.or(self.member_name).unwrap_or("Value")
    }

    /// Render the message for `id`. `{0}` is the subject; `args` fill `{1}`
    /// onwards.
    pub fn message(&self, id: ErrorId, args: &[&dyn Display]) -> String {
        let subject = self.subject();
        let mut all: Vec<&dyn Display> = Vec::with_capacity(args.len() + 1);
        all.push(&subject);
        all.extend_from_slice(args);
        format_message(&self.messages.lookup(id), &all)
    }

    /// Build a result for `id` attributed to `constraint`.
    pub fn report<'c>(
        &self,
        id: ErrorId,
        args: &[&dyn Display],
        constraint: &'c dyn Constraint,
    ) -> ValidationResult<'c> {
        ValidationResult::new(id, self.message(id, args))
            .with_member(self.member_name)
            .with_constraint(constraint)
    }
}

impl fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("kind", &self.kind)
            .field("member_name", &self.member_name)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}
