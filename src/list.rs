//! List population strategy.

use crate::error::Result;
use model_core::{PropertyDescriptor, TypeRef, Value};

/// Fills a sequence with exactly `item_count` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPopulator {
    item_count: usize,
}

impl ListPopulator {
    pub fn new(item_count: usize) -> Self {
        Self { item_count }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Populate a sequence property.
    ///
    /// A supplied sequence is cleared and refilled in place, so the returned
    /// vector is the same allocation that was passed in. Each slot is produced
    /// by `populate_element(depth, property_name, element_type, Value::Null, descriptor)`.
    pub fn populate<F>(
        &self,
        property_name: &str,
        element_type: &TypeRef,
        existing: Option<Vec<Value>>,
        depth: usize,
        descriptor: Option<&PropertyDescriptor>,
        mut populate_element: F,
    ) -> Result<Vec<Value>>
    where
        F: FnMut(usize, &str, &TypeRef, Value, Option<&PropertyDescriptor>) -> Result<Value>,
    {
        let mut items = existing.unwrap_or_default();
        items.clear();
        items.reserve(self.item_count);

        for _ in 0..self.item_count {
            let element =
                populate_element(depth, property_name, element_type, Value::Null, descriptor)?;
            items.push(element);
        }

        Ok(items)
    }
}
