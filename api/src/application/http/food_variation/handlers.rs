pub mod get_variation_ideas;
