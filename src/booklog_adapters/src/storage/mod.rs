pub mod local_cover_image_store;
