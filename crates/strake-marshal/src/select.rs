//! Backend selection: probe once, expose one immutable codec.
//!
//! Selection follows a terminal state machine — Uninitialized →
//! Probing → {FastSelected | SafeSelected} — realized as an explicit
//! strategy value plus a lazily-initialized process-wide instance.
//! Probing runs the offset validator and honors the
//! [`SAFE_ONLY_ENV`] environment override; once a verdict is reached
//! it holds for the life of the process.
//!
//! Error policy: the env override is a capability absence and selects
//! the safe backend silently. A failed layout validation is a
//! layout-invariant violation — explicit construction surfaces the
//! [`LayoutError`], and the global accessor refuses to start rather
//! than degrade, since degrading silently would hide a compiler whose
//! layout decisions this binary's fast path cannot trust.

use std::env;
use std::sync::OnceLock;

use strake_core::{validate_layouts, LayoutError};

use crate::codec::{BackendKind, Codec};

/// Environment variable forcing the safe backend (set to empty, `1`,
/// or `true`).
pub const SAFE_ONLY_ENV: &str = "STRAKE_SAFE_ONLY";

/// How to choose a backend when constructing a [`Codec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Validate aggregate layouts and select the fast backend.
    Auto,
    /// Select the safe backend without probing.
    SafeOnly,
}

impl Codec {
    /// Construct a codec with an explicit strategy.
    ///
    /// `Auto` runs the offset validator for every aggregate type; a
    /// validation failure is returned rather than silently mapped to
    /// the safe backend. One failing type disables the fast path for
    /// all types.
    pub fn with_strategy(strategy: Strategy) -> Result<Self, LayoutError> {
        match strategy {
            Strategy::SafeOnly => Ok(Codec {
                kind: BackendKind::Safe,
            }),
            Strategy::Auto => {
                validate_layouts()?;
                Ok(Codec {
                    kind: BackendKind::Fast,
                })
            }
        }
    }
}

/// The process-wide codec, selected on first access.
///
/// Thread-safe and idempotent: concurrent first-time callers observe
/// one consistently chosen backend. Honors [`SAFE_ONLY_ENV`].
///
/// # Panics
///
/// Panics if layout validation fails — a startup configuration
/// failure. The build-time assertions in `strake-core` make this
/// unreachable for binaries that compiled at all.
pub fn codec() -> &'static Codec {
    static INSTANCE: OnceLock<Codec> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let strategy = if env_flag(SAFE_ONLY_ENV) {
            Strategy::SafeOnly
        } else {
            Strategy::Auto
        };
        match Codec::with_strategy(strategy) {
            Ok(codec) => codec,
            Err(e) => panic!("aggregate layout validation failed: {e}"),
        }
    })
}

fn env_flag(name: &str) -> bool {
    flag_value(env::var(name).ok().as_deref())
}

/// Flag semantics: unset is off; set-but-empty is on; otherwise `1`
/// or a case-insensitive `true` is on.
fn flag_value(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => {
            let v = v.trim();
            v.is_empty() || v == "1" || v.eq_ignore_ascii_case("true")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_only_skips_probing() {
        let codec = Codec::with_strategy(Strategy::SafeOnly).unwrap();
        assert_eq!(codec.kind(), BackendKind::Safe);
    }

    #[test]
    fn auto_selects_fast_after_validation() {
        let codec = Codec::with_strategy(Strategy::Auto).unwrap();
        assert_eq!(codec.kind(), BackendKind::Fast);
    }

    #[test]
    fn global_codec_is_terminal() {
        let first = codec().kind();
        assert_eq!(codec().kind(), first);
    }

    #[test]
    fn flag_treats_empty_value_as_set() {
        assert!(!flag_value(None));
        assert!(flag_value(Some("")));
        assert!(flag_value(Some("  ")));
        assert!(flag_value(Some("1")));
        assert!(flag_value(Some("true")));
        assert!(flag_value(Some("TRUE")));
        assert!(!flag_value(Some("0")));
        assert!(!flag_value(Some("false")));
        assert!(!flag_value(Some("yes")));
    }
}
