#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Screen rectangle. `x`/`y` is the top-left corner; the right and bottom
/// edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn at(origin: Point, w: i32, h: i32) -> Self {
        Self::new(origin.x, origin.y, w, h)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True when the two rectangles share a region of positive area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn moved_to(mut self, origin: Point) -> Self {
        self.x = origin.x;
        self.y = origin.y;
        self
    }
}

pub trait Positionable {
    fn rect(&self) -> Rect;

    fn move_by(&mut self, dx: i32, dy: i32);

    fn position(&self) -> Point {
        self.rect().origin()
    }

    fn set_position(&mut self, origin: Point) {
        let current = self.position();
        self.move_by(origin.x - current.x, origin.y - current.y);
    }

    fn has_position(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    fn collides_with(&self, other: &dyn Positionable) -> bool {
        self.rect().overlaps(&other.rect())
    }
}
