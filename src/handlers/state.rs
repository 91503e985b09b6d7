//! Todo Controller - Core State Management
//!
//! Owns the single in-memory collection. Every operation runs under one
//! `RwLock`, and mutations hold the write guard across the whole
//! read-modify-write so index-based remove/insert never interleave.

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::errors::{AppError, Result, ValidationErrorExt};
use crate::metrics;
use crate::store::{by_id, Todo, TodoCollection, TodoId, TodoParams};
use crate::validation;

/// Central state for the server
pub struct TodoController {
    todos: RwLock<TodoCollection>,
    config: ServerConfig,
}

impl TodoController {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_collection(config, TodoCollection::new())
    }

    /// Start from an existing collection (tests, seeding)
    pub fn with_collection(config: ServerConfig, todos: TodoCollection) -> Self {
        metrics::TODO_RECORDS.set(todos.len() as i64);
        Self {
            todos: RwLock::new(todos),
            config,
        }
    }

    pub fn server_config(&self) -> &ServerConfig {
        &self.config
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.todos.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.read().is_empty()
    }

    /// Snapshot of every record in order
    pub fn list(&self) -> Vec<Todo> {
        let todos = self.todos.read().get().to_vec();
        metrics::record_operation("list", true);
        debug!(count = todos.len(), "Listed todos");
        todos
    }

    /// Store a new record under a freshly allocated ID. Any body ID is ignored.
    pub fn create(&self, params: TodoParams) -> Todo {
        let mut todos = self.todos.write();
        let id = todos.allocate_id();
        let todo = params.into_todo(id);
        todos.push(todo.clone());
        metrics::TODO_RECORDS.set(todos.len() as i64);
        drop(todos);

        metrics::record_operation("create", true);
        info!(todo_id = %todo.id, title = %todo.title, "Created todo");
        todo
    }

    /// First record with `id`, if any
    pub fn show(&self, id: TodoId) -> Option<Todo> {
        let todo = self.todos.read().filter(by_id(id)).first().cloned();
        metrics::record_operation("show", todo.is_some());
        debug!(todo_id = %id, found = todo.is_some(), "Fetched todo");
        todo
    }

    /// Replace the record with `id` in place.
    ///
    /// The path ID names the record; a body `Id`, when present, must agree.
    pub fn update(&self, id: TodoId, params: TodoParams) -> Result<Todo> {
        validation::check_body_id(id, params.id).map_validation_err("Id")?;
        let todo = params.into_todo(id);

        let result = {
            let mut todos = self.todos.write();
            Self::replace(&mut todos, todo)
        };

        metrics::record_operation("update", result.is_ok());
        if let Ok(ref updated) = result {
            info!(todo_id = %updated.id, "Updated todo");
        }
        result
    }

    /// Remove the record with `id` and return it
    pub fn delete(&self, id: TodoId) -> Result<Todo> {
        let result = {
            let mut todos = self.todos.write();
            let removed = todos
                .index_of(id)
                .ok_or(AppError::TodoNotFound(id))
                .and_then(|index| {
                    todos.remove_at(index).ok_or_else(|| {
                        AppError::ConcurrencyError(format!("Todo not removed id={id}"))
                    })
                });
            metrics::TODO_RECORDS.set(todos.len() as i64);
            removed
        };

        metrics::record_operation("delete", result.is_ok());
        if result.is_ok() {
            info!(todo_id = %id, "Deleted todo");
        }
        result
    }

    /// Remove-then-reinsert at the same position, keeping order and length
    fn replace(todos: &mut TodoCollection, todo: Todo) -> Result<Todo> {
        let id = todo.id;
        let index = todos.index(&todo).ok_or(AppError::TodoNotFound(id))?;

        todos
            .remove_at(index)
            .ok_or_else(|| AppError::ConcurrencyError(format!("Todo not removed id={id}")))?;

        todos
            .insert_at(index, todo.clone())
            .map_err(|_| AppError::ConcurrencyError(format!("Todo not reinserted id={id}")))?;

        Ok(todo)
    }
}
