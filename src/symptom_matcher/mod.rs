pub mod impl_substring;
pub mod impl_whole_word;
pub mod interface;
pub mod recommender;
