use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::{Collection, Item, NewItem};

/// Draft state for one admin form. Every field starts empty and the draft
/// lives only as long as the form does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    collection: Collection,
    fields: BTreeMap<&'static str, String>,
}

impl ItemForm {
    pub fn new(collection: Collection) -> Self {
        let fields = Self::field_names(collection)
            .iter()
            .map(|name| (*name, String::new()))
            .collect();
        Self { collection, fields }
    }

    /// Editable fields of a collection, in display order.
    pub fn field_names(collection: Collection) -> &'static [&'static str] {
        match collection {
            Collection::Courses => &["title", "teacher", "telegramLink", "date", "description"],
            Collection::Posts => &["content", "imageUrl", "date"],
            Collection::Teachers => &["name", "bio"],
            Collection::Schedule => &["day", "time", "topic"],
        }
    }

    /// Load an existing item for editing.
    pub fn from_item(item: &Item) -> Result<Self, AppError> {
        let mut form = Self::new(item.collection());
        if let Value::Object(map) = item.to_json()? {
            for (name, value) in map {
                if let Value::String(text) = value {
                    // `id` is not editable and is skipped here.
                    if form.has_field(&name) {
                        form.set(&name, text)?;
                    }
                }
            }
        }
        Ok(form)
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), AppError> {
        let slot = self.fields.get_mut(field).ok_or_else(|| {
            AppError::BadRequest(format!("{} has no field named {}", self.collection, field))
        })?;
        *slot = value.into();
        Ok(())
    }

    pub fn reset(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }

    pub fn to_new_item(&self) -> Result<NewItem, AppError> {
        NewItem::from_json(self.collection, Value::Object(self.to_map()))
    }

    pub fn to_item(&self, id: &str) -> Result<Item, AppError> {
        let mut map = self.to_map();
        map.insert("id".to_string(), Value::String(id.to_string()));
        Item::from_json(self.collection, Value::Object(map))
    }

    fn to_map(&self) -> Map<String, Value> {
        self.fields
            .iter()
            // An empty optional field means "not set".
            .filter(|(name, value)| !(**name == "imageUrl" && value.is_empty()))
            .map(|(name, value)| (name.to_string(), Value::String(value.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppContent;

    #[test]
    fn test_course_form_builds_new_item() {
        let mut form = ItemForm::new(Collection::Courses);
        form.set("title", "A").unwrap();
        form.set("teacher", "T").unwrap();
        form.set("telegramLink", "L").unwrap();
        form.set("date", "2024-01-01").unwrap();
        form.set("description", "D").unwrap();

        match form.to_new_item().unwrap() {
            NewItem::Course(course) => {
                assert_eq!(course.title, "A");
                assert_eq!(course.telegram_link, "L");
            }
            other => panic!("expected a course, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = ItemForm::new(Collection::Teachers);
        assert!(matches!(form.set("title", "x"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_empty_image_url_becomes_none() {
        let mut form = ItemForm::new(Collection::Posts);
        form.set("content", "hello").unwrap();
        form.set("date", "2024-05-01").unwrap();

        match form.to_new_item().unwrap() {
            NewItem::Post(post) => assert!(post.image_url.is_none()),
            other => panic!("expected a post, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_round_trip_keeps_id() {
        let content = AppContent::initial();
        let item = Item::ScheduleItem(content.schedule[0].clone());

        let mut form = ItemForm::from_item(&item).unwrap();
        assert_eq!(form.get("topic"), Some("Spoken English"));

        form.set("time", "10:30").unwrap();
        let edited = form.to_item(item.id()).unwrap();

        assert_eq!(edited.id(), item.id());
        match edited {
            Item::ScheduleItem(s) => assert_eq!(s.time, "10:30"),
            other => panic!("expected a schedule item, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = ItemForm::new(Collection::Teachers);
        form.set("name", "U Ba").unwrap();
        form.reset();
        assert_eq!(form.get("name"), Some(""));
    }
}
