pub mod review_generator;
pub mod star_rating;
pub mod toast;
