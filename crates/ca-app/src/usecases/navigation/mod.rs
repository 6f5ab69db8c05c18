mod resolve_view;

pub use resolve_view::ResolveView;
