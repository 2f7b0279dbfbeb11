//! The currency registry.
//!
//! A [`CurrencyRegistry`] owns three disjoint sets of codes:
//!
//! * **active** codes, loaded once from the ISO tables in
//!   [`crate::currencies`];
//! * **withdrawn** codes, only visible through [`CurrencyTypes::WITHDRAWN`]
//!   and always reporting [`UNKNOWN_MINOR_UNITS`];
//! * **user-defined** codes, added at runtime.
//!
//! The user-defined table is copy-on-write. Readers clone an `Arc` to the
//! currently published table and never wait on a writer's copy or
//! validation phase. Writers serialise on a mutex, build a complete new
//! table, and publish it with a single pointer swap, so a reader sees
//! either the table before the swap or the one after it.
//!
//! [`CurrencyRegistry::global`] returns the process-wide instance, created
//! on first use and never torn down.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use bitflags::bitflags;
use tender_core::{ensure, Error, Result};
use tender_math::MAX_SCALE;
use tracing::{debug, warn};

use crate::currencies;
use crate::currency::{Currency, UNKNOWN_MINOR_UNITS};

bitflags! {
    /// Which registry sets a lookup consults.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CurrencyTypes: u8 {
        /// Active ISO 4217 codes.
        const ACTIVE = 1;
        /// Codes registered at runtime.
        const USER_DEFINED = 1 << 1;
        /// Withdrawn ISO 4217 codes.
        const WITHDRAWN = 1 << 2;
        /// Active and user-defined codes: what [`Currency::of`] sees.
        const CURRENT = Self::ACTIVE.bits() | Self::USER_DEFINED.bits();
        /// Every set.
        const ANY = Self::CURRENT.bits() | Self::WITHDRAWN.bits();
    }
}

impl Default for CurrencyTypes {
    fn default() -> Self {
        CurrencyTypes::CURRENT
    }
}

type Table = HashMap<&'static str, Option<u8>>;

/// Registry of known currency codes and their minor units.
pub struct CurrencyRegistry {
    active: Table,
    withdrawn: HashSet<&'static str>,
    user_defined: RwLock<Arc<Table>>,
    writer: Mutex<()>,
}

static GLOBAL: OnceLock<CurrencyRegistry> = OnceLock::new();

impl CurrencyRegistry {
    // ── Construction ─────────────────────────────────────────────────────

    /// A registry holding the ISO tables and no user-defined codes.
    pub fn new() -> Self {
        Self {
            active: currencies::active()
                .map(|c| (c.code, c.minor_units))
                .collect(),
            withdrawn: currencies::withdrawn::WITHDRAWN
                .iter()
                .map(|(code, _)| *code)
                .collect(),
            user_defined: RwLock::new(Arc::new(Table::new())),
            writer: Mutex::new(()),
        }
    }

    /// The process-wide registry used by [`Currency::of`] and friends.
    pub fn global() -> &'static CurrencyRegistry {
        GLOBAL.get_or_init(CurrencyRegistry::new)
    }

    // ── Lookups ──────────────────────────────────────────────────────────

    /// Look up an active or user-defined currency.
    pub fn of(&self, code: &str) -> Result<Currency> {
        validate_code(code)?;
        self.try_create(code)
            .ok_or_else(|| Error::CurrencyNotFound(code.to_owned()))
    }

    /// Look up an active or user-defined currency, `None` if unknown.
    pub fn try_create(&self, code: &str) -> Option<Currency> {
        self.try_create_with(code, CurrencyTypes::CURRENT)
    }

    /// Look up `code` in the sets selected by `types`, in the order active,
    /// user-defined, withdrawn.
    pub fn try_create_with(&self, code: &str, types: CurrencyTypes) -> Option<Currency> {
        if types.contains(CurrencyTypes::ACTIVE) {
            if let Some((code, minor_units)) = self.active.get_key_value(code) {
                return Some(Currency::new(*code, *minor_units));
            }
        }
        if types.contains(CurrencyTypes::USER_DEFINED) {
            let table = self.snapshot();
            if let Some((code, minor_units)) = table.get_key_value(code) {
                return Some(Currency::new(*code, *minor_units));
            }
        }
        if types.contains(CurrencyTypes::WITHDRAWN) {
            if let Some(code) = self.withdrawn.get(code) {
                return Some(Currency::new(*code, Some(UNKNOWN_MINOR_UNITS)));
            }
        }
        None
    }

    /// Whether `code` is present in any of the sets selected by `types`.
    pub fn contains(&self, code: &str, types: CurrencyTypes) -> bool {
        self.try_create_with(code, types).is_some()
    }

    /// Every currency in the sets selected by `types`, sorted by code.
    pub fn currencies(&self, types: CurrencyTypes) -> Vec<Currency> {
        let mut out = Vec::new();
        if types.contains(CurrencyTypes::ACTIVE) {
            out.extend(self.active.iter().map(|(code, mu)| Currency::new(*code, *mu)));
        }
        if types.contains(CurrencyTypes::USER_DEFINED) {
            let table = self.snapshot();
            out.extend(table.iter().map(|(code, mu)| Currency::new(*code, *mu)));
        }
        if types.contains(CurrencyTypes::WITHDRAWN) {
            out.extend(
                self.withdrawn
                    .iter()
                    .map(|code| Currency::new(*code, Some(UNKNOWN_MINOR_UNITS))),
            );
        }
        out.sort_by_key(|c| c.code());
        out
    }

    /// Snapshot of the user-defined currencies, sorted by code.
    pub fn user_defined(&self) -> Vec<Currency> {
        self.currencies(CurrencyTypes::USER_DEFINED)
    }

    // ── Registration ─────────────────────────────────────────────────────

    /// Register a user-defined currency.
    ///
    /// Returns `Ok(false)`, leaving the registry untouched, if the code is
    /// already known in any set. A malformed code or minor units above 28
    /// are reported as [`Error::InvalidArgument`].
    pub fn register_currency(&self, code: &str, minor_units: Option<u8>) -> Result<bool> {
        validate_entry(code, minor_units)?;
        if self.is_reserved(code) {
            debug!(code, "currency code already active or withdrawn");
            return Ok(false);
        }

        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.snapshot();
        if current.contains_key(code) {
            debug!(code, "currency code already user-defined");
            return Ok(false);
        }
        let mut table = Table::clone(&current);
        table.insert(leak(code), minor_units);
        self.publish(table);
        debug!(code, ?minor_units, "registered user-defined currency");
        Ok(true)
    }

    /// Register several user-defined currencies, all or nothing.
    ///
    /// Every entry is validated before anything else happens; the first
    /// malformed entry fails the call with an error naming its code. If any
    /// code collides with a known code, or appears twice in `entries`, the
    /// call returns `Ok(false)` and nothing is registered. Otherwise all
    /// entries are published in a single swap.
    pub fn register_currencies<I, S>(&self, entries: I) -> Result<bool>
    where
        I: IntoIterator<Item = (S, Option<u8>)>,
        S: AsRef<str>,
    {
        let entries: Vec<(S, Option<u8>)> = entries.into_iter().collect();
        for (code, minor_units) in &entries {
            validate_entry(code.as_ref(), *minor_units)?;
        }

        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.snapshot();
        let mut seen = HashSet::with_capacity(entries.len());
        for (code, _) in &entries {
            let code = code.as_ref();
            if self.is_reserved(code) || current.contains_key(code) || !seen.insert(code) {
                debug!(code, "bulk registration rejected on colliding code");
                return Ok(false);
            }
        }

        let mut table = Table::clone(&current);
        for (code, minor_units) in &entries {
            table.insert(leak(code.as_ref()), *minor_units);
        }
        self.publish(table);
        debug!(count = entries.len(), "registered user-defined currencies");
        Ok(true)
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn is_reserved(&self, code: &str) -> bool {
        self.active.contains_key(code) || self.withdrawn.contains(code)
    }

    fn snapshot(&self) -> Arc<Table> {
        // The lock only guards the pointer; a poisoned guard still holds a
        // complete table.
        Arc::clone(
            &self
                .user_defined
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    fn publish(&self, table: Table) {
        *self
            .user_defined
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(table);
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CurrencyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("active", &self.active.len())
            .field("withdrawn", &self.withdrawn.len())
            .field("user_defined", &self.snapshot().len())
            .finish()
    }
}

/// Registered codes live as long as the process; the registry never
/// forgets a code.
fn leak(code: &str) -> &'static str {
    Box::leak(code.to_owned().into_boxed_str())
}

/// Check that `code` is exactly three uppercase ASCII letters.
pub fn validate_code(code: &str) -> Result<()> {
    ensure!(
        code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()),
        "currency code must be three uppercase ASCII letters, got {code:?}"
    );
    Ok(())
}

fn validate_entry(code: &str, minor_units: Option<u8>) -> Result<()> {
    let checked = validate_code(code).and_then(|()| {
        if let Some(mu) = minor_units {
            ensure!(
                u32::from(mu) <= MAX_SCALE,
                "minor units for {code} out of range [0, {MAX_SCALE}]: {mu}"
            );
        }
        Ok(())
    });
    if let Err(err) = &checked {
        warn!(code, %err, "rejected currency registration");
    }
    checked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_order_and_filters() {
        let registry = CurrencyRegistry::new();
        assert_eq!(registry.of("EUR").unwrap().minor_units(), Some(2));
        assert!(registry.contains("ITL", CurrencyTypes::WITHDRAWN));
        assert!(!registry.contains("ITL", CurrencyTypes::CURRENT));
        assert!(!registry.contains("EUR", CurrencyTypes::WITHDRAWN));
        assert!(registry.contains("EUR", CurrencyTypes::ANY));
        assert_eq!(CurrencyTypes::default(), CurrencyTypes::CURRENT);
    }

    #[test]
    fn register_one() {
        let registry = CurrencyRegistry::new();
        assert!(registry.try_create("ZZA").is_none());
        assert!(registry.register_currency("ZZA", Some(3)).unwrap());
        let zza = registry.of("ZZA").unwrap();
        assert_eq!(zza.minor_units(), Some(3));
        assert!(registry.contains("ZZA", CurrencyTypes::USER_DEFINED));
        assert!(!registry.contains("ZZA", CurrencyTypes::ACTIVE));

        // second registration is a collision, not an error
        assert!(!registry.register_currency("ZZA", Some(2)).unwrap());
        assert_eq!(registry.of("ZZA").unwrap().minor_units(), Some(3));
    }

    #[test]
    fn register_one_rejects_known_codes() {
        let registry = CurrencyRegistry::new();
        assert!(!registry.register_currency("EUR", Some(2)).unwrap());
        assert!(!registry.register_currency("FRF", Some(2)).unwrap());
        assert!(registry.user_defined().is_empty());
    }

    #[test]
    fn register_one_validates() {
        let registry = CurrencyRegistry::new();
        assert!(matches!(
            registry.register_currency("zza", Some(2)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            registry.register_currency("ZZ1", Some(2)),
            Err(Error::InvalidArgument(_))
        ));
        let err = registry.register_currency("ZZB", Some(29)).unwrap_err();
        assert!(err.to_string().contains("ZZB"));
        assert!(registry.register_currency("ZZC", Some(28)).unwrap());
        assert!(registry.register_currency("ZZD", None).unwrap());
    }

    #[test]
    fn register_many_is_all_or_nothing() {
        let registry = CurrencyRegistry::new();
        assert!(registry
            .register_currencies([("ZZE", Some(2)), ("ZZF", Some(0))])
            .unwrap());
        assert_eq!(registry.user_defined().len(), 2);

        // one collision blocks the whole batch
        assert!(!registry
            .register_currencies([("ZZG", Some(2)), ("USD", Some(2))])
            .unwrap());
        assert!(registry.try_create("ZZG").is_none());

        // duplicates inside the batch collide with each other
        assert!(!registry
            .register_currencies([("ZZH", Some(2)), ("ZZH", Some(3))])
            .unwrap());
        assert!(registry.try_create("ZZH").is_none());

        // collisions with earlier user-defined codes count too
        assert!(!registry
            .register_currencies([("ZZI", Some(2)), ("ZZE", Some(2))])
            .unwrap());
        assert!(registry.try_create("ZZI").is_none());
    }

    #[test]
    fn register_many_names_the_malformed_code() {
        let registry = CurrencyRegistry::new();
        let err = registry
            .register_currencies(vec![
                ("ZZJ".to_string(), Some(2)),
                ("ZZK".to_string(), Some(99)),
                ("EUR".to_string(), Some(2)),
            ])
            .unwrap_err();
        assert!(matches!(&err, Error::InvalidArgument(msg) if msg.contains("ZZK")));
        assert!(registry.user_defined().is_empty());
    }

    #[test]
    fn empty_batch_succeeds() {
        let registry = CurrencyRegistry::new();
        let none: [(&str, Option<u8>); 0] = [];
        assert!(registry.register_currencies(none).unwrap());
    }

    #[test]
    fn every_currency_has_valid_precision() {
        let registry = CurrencyRegistry::new();
        registry.register_currency("ZZL", Some(28)).unwrap();
        for currency in registry.currencies(CurrencyTypes::ANY) {
            let dp = currency.decimal_places();
            assert!(dp <= 28, "{currency}: {dp}");
            assert_eq!(currency.has_fixed_decimal_places(), dp != 28, "{currency}");
        }
    }
}
