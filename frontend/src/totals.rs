use std::rc::Rc;

use log::warn;
use serde::{Deserialize, Serialize};

pub const BUDGET: &str = "Budget";
pub const EXPENSES: &str = "Expenses";

const ENTRIES_KEY: &str = "entries";

/// Read-only access to per-category totals.
pub trait TotalsProvider {
    fn total_amount(&self, category: &str) -> f64;
}

/// Shared provider handle passed through component props.
///
/// Two handles are equal when they point at the same provider.
#[derive(Clone)]
pub struct TotalsHandle(pub Rc<dyn TotalsProvider>);

impl TotalsHandle {
    pub fn new<P: TotalsProvider + 'static>(provider: P) -> Self {
        Self(Rc::new(provider))
    }
}

impl PartialEq for TotalsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for TotalsHandle {
    type Target = dyn TotalsProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
}

impl Entry {
    pub fn is_expense(&self) -> bool {
        self.category == EXPENSES
    }
}

/// Category entries kept in the browser's local storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryStore {
    entries: Vec<Entry>,
}

impl CategoryStore {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Entries newest first. Same-day entries keep the latest id on top.
    pub fn history(&self) -> Vec<Entry> {
        let mut items = self.entries.clone();
        items.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        items
    }
}

impl TotalsProvider for CategoryStore {
    fn total_amount(&self, category: &str) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .map(|entry| entry.amount)
            .sum()
    }
}

pub fn load_category_store() -> CategoryStore {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(ENTRIES_KEY) {
                match serde_json::from_str::<Vec<Entry>>(&raw) {
                    Ok(entries) => return CategoryStore::new(entries),
                    Err(err) => warn!("ignoring stored {}: {}", ENTRIES_KEY, err),
                }
            }
        }
    }

    CategoryStore::default()
}
