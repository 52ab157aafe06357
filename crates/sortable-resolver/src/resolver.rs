//! `FieldSortResolver`: whitelist lookup, direction check, polarity
//! resolution, and application to a collection.

use sortable_core::direction::{Direction, SortRequest};
use sortable_core::directive::OrderingDirective;
use sortable_core::error::Result;
use sortable_core::field::{FieldSpec, FieldToken, Whitelist};
use sortable_core::record::Record;

use crate::objects::Objects;
use crate::sort;
use crate::traits::OrderBy;

/// Why a request resolved to "leave the collection alone".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No field name was given.
    NoField,
    /// The whitelist has no entry for the requested public name, or (without
    /// a whitelist) the name is nothing but a polarity marker.
    UnknownField,
    /// The direction token was neither `asc` nor `desc`.
    InvalidDirection,
}

/// Outcome of [`FieldSortResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Directive(OrderingDirective),
    Unchanged(SkipReason),
}

impl Resolution {
    pub fn into_directive(self) -> Option<OrderingDirective> {
        match self {
            Resolution::Directive(d) => Some(d),
            Resolution::Unchanged(_) => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Resolution::Unchanged(_))
    }
}

/// Maps public sort requests onto underlying fields.
///
/// Without a whitelist (or with an empty one) any field name is accepted and
/// used literally. With a whitelist only its public names sort; anything else
/// leaves the collection untouched.
#[derive(Debug, Clone, Default)]
pub struct FieldSortResolver {
    whitelist: Option<Whitelist>,
}

impl FieldSortResolver {
    /// Build a resolver from an optional list of field specs.
    pub fn new(fields: Option<Vec<FieldSpec>>) -> Result<Self> {
        match fields {
            Some(specs) => Ok(Self::with_whitelist(Whitelist::new(specs)?)),
            None => Ok(Self::unrestricted()),
        }
    }

    /// A resolver that accepts every field name as-is.
    pub fn unrestricted() -> Self {
        Self { whitelist: None }
    }

    pub fn with_whitelist(whitelist: Whitelist) -> Self {
        let whitelist = (!whitelist.is_empty()).then_some(whitelist);
        Self { whitelist }
    }

    pub fn whitelist(&self) -> Option<&Whitelist> {
        self.whitelist.as_ref()
    }

    /// Resolve a raw (field, direction) pair.
    pub fn resolve(&self, field_name: &str, direction: &str) -> Resolution {
        self.resolve_with(field_name, Direction::parse(direction))
    }

    pub fn resolve_request(&self, request: &SortRequest) -> Resolution {
        self.resolve_with(&request.field, request.direction)
    }

    fn resolve_with(&self, field_name: &str, direction: Option<Direction>) -> Resolution {
        if field_name.is_empty() {
            return Resolution::Unchanged(SkipReason::NoField);
        }

        let literal;
        let tokens: &[FieldToken] = match &self.whitelist {
            Some(whitelist) => match whitelist.get(field_name) {
                Some(tokens) => tokens,
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(field = field_name, "field not in whitelist; leaving order unchanged");
                    return Resolution::Unchanged(SkipReason::UnknownField);
                }
            },
            None => match FieldToken::parse(field_name) {
                Ok(token) => {
                    literal = [token];
                    &literal
                }
                Err(_) => return Resolution::Unchanged(SkipReason::UnknownField),
            },
        };

        let Some(direction) = direction else {
            #[cfg(feature = "tracing")]
            tracing::debug!(field = field_name, "invalid sort direction; leaving order unchanged");
            return Resolution::Unchanged(SkipReason::InvalidDirection);
        };

        Resolution::Directive(OrderingDirective::from_tokens(tokens, direction))
    }

    /// Apply an already-resolved directive to `objects`.
    pub fn apply<Q, R>(
        &self,
        objects: Objects<Q, R>,
        directive: &OrderingDirective,
    ) -> Result<Objects<Q, R>>
    where
        Q: OrderBy,
        R: Record,
    {
        sort::apply(objects, directive)
    }

    /// Resolve and apply in one step.
    ///
    /// Returns `objects` itself, untouched, when the request resolves to
    /// "unchanged"; that check happens before the collection is inspected.
    pub fn sorted<Q, R>(
        &self,
        objects: Objects<Q, R>,
        field_name: &str,
        direction: &str,
    ) -> Result<Objects<Q, R>>
    where
        Q: OrderBy,
        R: Record,
    {
        match self.resolve(field_name, direction) {
            Resolution::Directive(directive) => self.apply(objects, &directive),
            Resolution::Unchanged(_) => Ok(objects),
        }
    }

    /// Ordering expression such as `"name DESC, id ASC"`, or `default` when
    /// the field is unknown or the direction invalid.
    pub fn to_ordering_expression(
        &self,
        field_name: &str,
        direction: &str,
        default: Option<&str>,
    ) -> Option<String> {
        match self.resolve(field_name, direction) {
            Resolution::Directive(directive) => Some(directive.to_expression()),
            Resolution::Unchanged(_) => default.map(str::to_string),
        }
    }

    /// Apply polarity markers to raw tokens, producing query-layer strings
    /// (`field` or `-field`). A direction other than `asc`/`desc` is treated
    /// as `asc`.
    ///
    /// ```
    /// use sortable_resolver::FieldSortResolver;
    ///
    /// let fields = ["++one", "--two", "+three", "four", "-five"];
    /// assert_eq!(
    ///     FieldSortResolver::prepare_fields(&fields, "desc").unwrap(),
    ///     ["one", "-two", "-three", "-four", "five"]
    /// );
    /// ```
    pub fn prepare_fields<S: AsRef<str>>(tokens: &[S], direction: &str) -> Result<Vec<String>> {
        let direction = Direction::parse(direction).unwrap_or(Direction::Asc);
        let tokens = tokens
            .iter()
            .map(|t| FieldToken::parse(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(OrderingDirective::from_tokens(&tokens, direction).order_by_fields())
    }
}
