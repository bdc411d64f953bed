//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::articles;
use crate::domain::{Article, NewArticle};

/// Row struct for reading from the articles table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ArticleRow {
    pub id: i32,
    pub author: String,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub minutes_to_read: i32,
    pub date: NaiveDateTime,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            author: row.author,
            title: row.title,
            content: row.content,
            preview: row.preview,
            minutes_to_read: row.minutes_to_read,
            date: row.date,
        }
    }
}

/// Insertable struct for creating new article records.
///
/// `id` and `date` stay unset so the database assigns them.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = articles)]
pub(crate) struct NewArticleRow<'a> {
    pub author: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub preview: &'a str,
    pub minutes_to_read: i32,
}

impl<'a> From<&'a NewArticle> for NewArticleRow<'a> {
    fn from(article: &'a NewArticle) -> Self {
        Self {
            author: &article.author,
            title: &article.title,
            content: &article.content,
            preview: &article.preview,
            minutes_to_read: article.minutes_to_read,
        }
    }
}
