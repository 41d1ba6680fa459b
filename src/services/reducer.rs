use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{AppContent, Collection, Course, Item, NewItem, Post, ScheduleItem, Teacher};

/// Every way the content aggregate can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentAction {
    Add(NewItem),
    Update(Item),
    Delete { collection: Collection, id: String },
    SetHistory(String),
    SetContact(String),
}

/// What a successfully applied action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added { collection: Collection, id: String },
    Updated { collection: Collection, id: String },
    Deleted { collection: Collection, id: String },
    HistorySet,
    ContactSet,
}

/// Fresh item id. UUID v4, so ids stay distinct even when several are
/// minted within the same clock tick.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Apply `action` to `content`, returning the next aggregate. Exactly one
/// field of the aggregate differs from the input; on error the input is
/// untouched.
pub fn reduce(content: &AppContent, action: ContentAction) -> Result<(AppContent, Change), AppError> {
    let mut next = content.clone();

    let change = match action {
        ContentAction::Add(new_item) => {
            let collection = new_item.collection();
            let id = new_id();
            match new_item.with_id(id.clone()) {
                Item::Course(c) => next.courses.push(c),
                Item::Post(p) => next.posts.push(p),
                Item::Teacher(t) => next.teachers.push(t),
                Item::ScheduleItem(s) => next.schedule.push(s),
            }
            Change::Added { collection, id }
        }
        ContentAction::Update(item) => {
            let collection = item.collection();
            let id = item.id().to_string();
            match item {
                Item::Course(c) => replace_by_id(&mut next.courses, c)?,
                Item::Post(p) => replace_by_id(&mut next.posts, p)?,
                Item::Teacher(t) => replace_by_id(&mut next.teachers, t)?,
                Item::ScheduleItem(s) => replace_by_id(&mut next.schedule, s)?,
            }
            Change::Updated { collection, id }
        }
        ContentAction::Delete { collection, id } => {
            match collection {
                Collection::Courses => remove_by_id(&mut next.courses, &id)?,
                Collection::Posts => remove_by_id(&mut next.posts, &id)?,
                Collection::Teachers => remove_by_id(&mut next.teachers, &id)?,
                Collection::Schedule => remove_by_id(&mut next.schedule, &id)?,
            }
            Change::Deleted { collection, id }
        }
        ContentAction::SetHistory(text) => {
            next.course_history = text;
            Change::HistorySet
        }
        ContentAction::SetContact(number) => {
            next.contact_viber = number;
            Change::ContactSet
        }
    };

    debug!("applied content change: {:?}", change);
    Ok((next, change))
}

trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Teacher {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for ScheduleItem {
    fn id(&self) -> &str {
        &self.id
    }
}

fn replace_by_id<T: HasId>(items: &mut [T], item: T) -> Result<(), AppError> {
    let slot = items
        .iter_mut()
        .find(|existing| existing.id() == item.id())
        .ok_or(AppError::NotFound)?;
    *slot = item;
    Ok(())
}

fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: &str) -> Result<(), AppError> {
    let index = items
        .iter()
        .position(|existing| existing.id() == id)
        .ok_or(AppError::NotFound)?;
    items.remove(index);
    Ok(())
}
