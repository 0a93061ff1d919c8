pub mod activity_list;
pub mod balance_cards;
pub mod leave_form;
