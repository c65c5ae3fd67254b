pub mod rental_frame;
