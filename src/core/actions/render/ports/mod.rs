pub mod canvas_surface;
