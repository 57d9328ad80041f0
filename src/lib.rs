pub mod cards;
pub mod catalog;
pub mod detail_view;
pub mod gallery;
pub mod html;
pub mod session;
pub mod utilities;

#[cfg(test)]
mod test;
