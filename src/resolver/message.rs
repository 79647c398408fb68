//! Message resolution strategies.

use std::collections::HashMap;

use crate::cause::Cause;
use crate::error::{BoxError, ConfigError, MessageResolvingError};
use crate::message::Message;

/// Derives the [`Message`] for a cause.
pub trait MessageResolver<T: ?Sized>: Send + Sync {
    fn message_for(&self, cause: &Cause<'_, T>) -> Result<Message, MessageResolvingError>;
}

/// Resolver returning the same message for every cause.
pub fn fixed(message: impl Into<Message>) -> FixedMessageResolver {
    FixedMessageResolver {
        message: message.into(),
    }
}

#[derive(Debug, Clone)]
pub struct FixedMessageResolver {
    message: Message,
}

impl<T: ?Sized> MessageResolver<T> for FixedMessageResolver {
    fn message_for(&self, _cause: &Cause<'_, T>) -> Result<Message, MessageResolvingError> {
        Ok(self.message.clone())
    }
}

/// Resolver looking the message up by cause key; absence of the exact key is
/// a hard failure naming the key.
pub fn mapped<I, K, V>(entries: I) -> Result<MappedMessageResolver, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Message>,
{
    let messages: HashMap<String, Message> = entries
        .into_iter()
        .map(|(key, message)| (key.into(), message.into()))
        .collect();
    if messages.is_empty() {
        return Err(ConfigError::EmptyMapping {
            component: "mapped message resolver",
        });
    }
    Ok(MappedMessageResolver { messages })
}

#[derive(Debug, Clone)]
pub struct MappedMessageResolver {
    messages: HashMap<String, Message>,
}

impl<T: ?Sized> MessageResolver<T> for MappedMessageResolver {
    fn message_for(&self, cause: &Cause<'_, T>) -> Result<Message, MessageResolvingError> {
        self.messages
            .get(cause.key())
            .cloned()
            .ok_or_else(|| MessageResolvingError::UnmappedKey {
                key: cause.key().to_owned(),
            })
    }
}

/// Resolver computing the message with a caller-supplied function.
pub fn from_fn<F>(f: F) -> FnMessageResolver<F> {
    FnMessageResolver { f }
}

pub struct FnMessageResolver<F> {
    f: F,
}

impl<T, F> MessageResolver<T> for FnMessageResolver<F>
where
    T: ?Sized,
    F: Fn(&Cause<'_, T>) -> Result<Message, BoxError> + Send + Sync,
{
    fn message_for(&self, cause: &Cause<'_, T>) -> Result<Message, MessageResolvingError> {
        (self.f)(cause).map_err(|source| MessageResolvingError::Failed {
            key: cause.key().to_owned(),
            source,
        })
    }
}
