use iced::widget::{Svg, svg};
use include_dir::{Dir, include_dir};
use tracing::warn;

static ICONS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Load one of the bundled SVG icons by file stem.
pub fn icon(name: &str) -> Svg<'static> {
    let handle = match ICONS.get_file(format!("{name}.svg")) {
        Some(file) => svg::Handle::from_memory(file.contents()),
        None => {
            warn!("Missing icon '{name}'");
            svg::Handle::from_memory(Vec::<u8>::new())
        }
    };

    svg(handle).width(18).height(18)
}
