//! Context commands offered alongside a provider's items.
//!
//! A command may be bound to a *mode*: the name of the provider the user
//! came from. Mode-less commands are always offered; moded commands only
//! when the previous provider matches.

use crate::error::Result;
use crate::field::FieldResolver;
use crate::rank::ListRankAndFilter;
use crate::ranked::RankedItem;

/// A named command carrying the caller's action payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextCommand<A> {
    pub name: String,
    pub mode: Option<String>,
    pub action: A,
}

impl<A> ContextCommand<A> {
    /// Whether this command is offered after leaving `previous_provider`.
    #[must_use]
    pub fn applies_to(&self, previous_provider: Option<&str>) -> bool {
        match self.mode.as_deref() {
            None => true,
            Some(mode) => previous_provider == Some(mode),
        }
    }
}

/// What the user typed and where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub query: String,
    pub previous_provider: Option<String>,
}

impl InputState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            previous_provider: None,
        }
    }

    /// Record the provider the user just left.
    #[must_use]
    pub fn from_provider(mut self, provider: impl Into<String>) -> Self {
        self.previous_provider = Some(provider.into());
        self
    }
}

/// Registry of context commands, ranked by name.
pub struct ContextCommands<A> {
    commands: Vec<ContextCommand<A>>,
    ranker: ListRankAndFilter<ContextCommand<A>>,
}

impl<A: 'static> Default for ContextCommands<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> ContextCommands<A> {
    pub fn new() -> Self {
        Self::with_ranker(ListRankAndFilter::new(Self::name_field()))
    }

    /// Use a preconfigured ranker, e.g. with a custom scorer.
    pub fn with_ranker(ranker: ListRankAndFilter<ContextCommand<A>>) -> Self {
        Self {
            commands: Vec::new(),
            ranker,
        }
    }

    /// Resolver for the `name` field that commands are ranked on.
    pub fn name_field() -> FieldResolver<ContextCommand<A>> {
        FieldResolver::new("name", |c: &ContextCommand<A>| c.name.clone())
    }

    /// Register a command offered regardless of provider.
    pub fn add_command(&mut self, name: impl Into<String>, action: A) -> &mut Self {
        self.commands.push(ContextCommand {
            name: name.into(),
            mode: None,
            action,
        });
        self
    }

    /// Register a command offered only after leaving provider `mode`.
    pub fn add_mode_command(
        &mut self,
        mode: impl Into<String>,
        name: impl Into<String>,
        action: A,
    ) -> &mut Self {
        self.commands.push(ContextCommand {
            name: name.into(),
            mode: Some(mode.into()),
            action,
        });
        self
    }

    /// Registered commands in insertion order.
    #[must_use]
    pub fn commands(&self) -> &[ContextCommand<A>] {
        &self.commands
    }

    /// Rank commands by name against the query, keeping those whose mode
    /// applies to the previous provider.
    pub fn rank(&self, input: &InputState) -> Result<Vec<RankedItem<&ContextCommand<A>>>> {
        let previous = input.previous_provider.as_deref();
        self.ranker
            .rank_and_filter_with(&input.query, &self.commands, |command| {
                command.applies_to(previous)
            })
    }
}

impl<A: core::fmt::Debug> core::fmt::Debug for ContextCommands<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContextCommands")
            .field("commands", &self.commands)
            .field("ranker", &self.ranker)
            .finish()
    }
}
