//! UI Components
//!
//! Form-control wrappers and the two complaint views.

mod input;
mod text_area;
mod button;
mod card;
mod complaint_form;
mod complaint_list;

pub use input::Input;
pub use text_area::TextArea;
pub use button::Button;
pub use card::Card;
pub use complaint_form::ComplaintForm;
pub use complaint_list::ComplaintList;
