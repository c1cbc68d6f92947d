use glam::{DVec2, IVec2};
use mathplot::data_types::{
    BoundingBox, Color, Font, LabelAlign, Orientation, Pen, ScrollbarConfig,
};
use mathplot::{
    DrawSurface, FunctionX, FunctionY, ParametricCurve, PlotCommand, PlotView, ScaleX, ScaleY,
    ViewportHost,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Terminal "window": one character per pixel.
struct CharGrid {
    width: i32,
    height: i32,
    origin: IVec2,
    cells: Vec<char>,
    brush: char,
}

impl CharGrid {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            origin: IVec2::ZERO,
            cells: vec![' '; (width * height) as usize],
            brush: '*',
        }
    }

    fn put(&mut self, at: IVec2, c: char) {
        let p = at + self.origin;
        if p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height {
            self.cells[(p.y * self.width + p.x) as usize] = c;
        }
    }

    fn print(&self) {
        for row in self.cells.chunks(self.width as usize) {
            println!("{}", row.iter().collect::<String>());
        }
    }
}

impl DrawSurface for CharGrid {
    fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    fn set_device_origin(&mut self, origin: IVec2) {
        self.origin = origin;
    }

    fn clear(&mut self, color: Color) {
        let fill = if color == Color::WHITE { ' ' } else { '#' };
        self.cells.fill(fill);
    }

    fn set_pen(&mut self, pen: &Pen) {
        self.brush = if pen.color == Color::GREY {
            '.'
        } else {
            '*'
        };
    }

    fn set_font(&mut self, _font: &Font) {}

    fn draw_point(&mut self, at: IVec2) {
        self.put(at, self.brush);
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2) {
        let steps = (to - from).abs().max_element().max(1);
        for i in 0..=steps {
            let p = from + (to - from) * i / steps;
            self.put(p, self.brush);
        }
    }

    fn draw_text(&mut self, text: &str, at: IVec2) {
        for (i, c) in text.chars().enumerate() {
            self.put(at + IVec2::new(i as i32, 0), c);
        }
    }

    fn text_extent(&self, text: &str) -> IVec2 {
        IVec2::new(text.chars().count() as i32, 1)
    }
}

#[derive(Default)]
struct TerminalHost {
    scrollbars: Option<ScrollbarConfig>,
}

impl ViewportHost for TerminalHost {
    fn set_scrollbars(&mut self, config: ScrollbarConfig) {
        self.scrollbars = Some(config);
    }

    fn request_redraw(&mut self) {}
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (width, height) = (100, 36);
    let mut view = PlotView::with_host(TerminalHost::default());
    view.handle_resize(width, height);

    view.add_layer(Box::new(ScaleX::new("x")));
    view.add_layer(Box::new(ScaleY::new("y")));
    view.add_layer(Box::new(
        FunctionX::new("sin(x)", f64::sin)
            .with_bounds(BoundingBox::new(-7.0, 7.0, -1.5, 1.5))
            .with_align(LabelAlign::Start),
    ));
    view.add_layer(Box::new(FunctionY::new("x = y^2 / 2", |y| y * y / 2.0)));
    view.add_layer(Box::new(ParametricCurve::from_fn("circle", 32, |i| {
        let t = i as f64 / 32.0 * std::f64::consts::TAU;
        DVec2::new(t.cos(), t.sin())
    })));

    view.handle_command(PlotCommand::Fit);
    info!(scale_x = view.scale_x(), scale_y = view.scale_y(), "fitted");

    let mut grid = CharGrid::new(width, height);
    view.render(&mut grid);
    grid.print();

    view.handle_command(PlotCommand::ZoomIn);
    if let Some(s) = view.host().scrollbars {
        view.handle_scroll(Orientation::Horizontal, s.scroll_x + width / 4);
    }
    info!(pos_x = view.pos_x(), "zoomed and scrolled right");

    let mut grid = CharGrid::new(width, height);
    view.render(&mut grid);
    grid.print();
}
