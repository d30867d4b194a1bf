//! Logger bindings on a `Context`.

use std::io::Write;

use super::chain::Context;
use crate::logging::{Handle, Severity, DEFAULT_LEVEL};

/// Private key the logger is stored under.
struct LoggerKey;

/// Build a logger writing to `out` and derive a child of `parent` carrying
/// it. The same handle is returned alongside the child context.
pub fn bind<W: Write + Send + 'static>(
    parent: &Context,
    out: W,
    level: Severity,
) -> (Context, Handle) {
    bind_handle(parent, Handle::new(out, level))
}

/// Derive a child of `parent` carrying an existing handle.
pub fn bind_handle(parent: &Context, logger: Handle) -> (Context, Handle) {
    let ctx = parent.with_value::<LoggerKey, _>(logger.clone());
    (ctx, logger)
}

/// The logger bound to `ctx`.
///
/// When nothing (or something other than a logger) is stored, a new stdout
/// logger at the default level is returned. The fallback is not stored, so
/// every miss builds a fresh one.
pub fn from_context(ctx: &Context) -> Handle {
    match ctx.value::<LoggerKey>() {
        Some(value) => match value.downcast_ref::<Handle>() {
            Some(logger) => logger.clone(),
            None => {
                log::debug!("LOGGER_CONTEXT_FALLBACK reason=type_mismatch");
                Handle::stdout(DEFAULT_LEVEL)
            }
        },
        None => {
            log::trace!("LOGGER_CONTEXT_FALLBACK reason=absent");
            Handle::stdout(DEFAULT_LEVEL)
        }
    }
}

impl Context {
    /// Shorthand for [`from_context`].
    pub fn logger(&self) -> Handle {
        from_context(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{Destination, Logger};
    use crate::sink::MemorySink;

    #[test]
    fn test_fallback_is_fresh_default() {
        let ctx = Context::background();

        let first = from_context(&ctx);
        let second = from_context(&ctx);

        for logger in [&first, &second] {
            assert_eq!(logger.level(), Some(Severity::Info));
            assert_eq!(logger.destination(), Destination::Stdout);
        }
        assert!(!first.ptr_eq(&second));
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_bound_logger_is_returned() {
        let sink = MemorySink::new();
        let (ctx, logger) = bind(&Context::background(), sink.clone(), Severity::Warn);

        let found = from_context(&ctx);
        assert!(found.ptr_eq(&logger));
        assert_eq!(found.level(), Some(Severity::Warn));
        assert_eq!(found.destination(), Destination::Writer);

        found.info().msg("suppressed");
        ctx.logger().warn().str("path", "/login").msg("slow request");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["path"], "/login");
    }

    #[test]
    fn test_bind_leaves_parent_untouched() {
        let parent_sink = MemorySink::new();
        let (parent, parent_logger) =
            bind(&Context::background(), parent_sink.clone(), Severity::Debug);
        let (child, child_logger) = bind(&parent, MemorySink::new(), Severity::Error);

        assert!(from_context(&parent).ptr_eq(&parent_logger));
        assert!(from_context(&child).ptr_eq(&child_logger));

        let root = Context::background();
        let (_child, _) = bind(&root, MemorySink::new(), Severity::Error);
        assert_eq!(root.depth(), 0);
        assert_eq!(from_context(&root).destination(), Destination::Stdout);
    }

    #[test]
    fn test_type_mismatch_falls_back() {
        let ctx = Context::background().with_value::<LoggerKey, _>("not a logger");

        let logger = from_context(&ctx);
        assert_eq!(logger.level(), Some(Severity::Info));
        assert_eq!(logger.destination(), Destination::Stdout);
    }

    #[test]
    fn test_bind_existing_handle() {
        let sink = MemorySink::new();
        let base = Handle::new(sink.clone(), Severity::Info);
        let scoped = base.with().str("request_id", "r-9").logger();

        let (ctx, _) = bind_handle(&Context::background(), scoped);
        ctx.logger().info().msg("scoped");

        assert_eq!(sink.records()[0]["request_id"], "r-9");
    }
}
