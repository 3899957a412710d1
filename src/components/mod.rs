//! UI Components
//!
//! Leptos components making up the todo widget.

mod new_todo_form;
mod filter_bar;
mod todo_row;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use filter_bar::FilterBar;
pub use todo_row::TodoRow;
pub use todo_list::TodoList;
