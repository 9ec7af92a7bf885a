use std::time::Duration;

use iced::{
    advanced::{
        layout, renderer,
        widget::tree::{self, Tree},
        Clipboard, Layout, Shell, Widget,
    },
    event, mouse,
    time::Instant,
    window, Element, Event, Length, Rectangle, Renderer, Size,
};

use crate::component::text;

/// A busy indicator cycling through `children` at a fixed rate.
///
/// `interval` is how long each child stays on screen.
pub struct Carousel<'a, Message, Theme> {
    interval: Duration,
    children: Vec<Element<'a, Message, Theme>>,
}

impl<'a, Message, Theme> Carousel<'a, Message, Theme> {
    pub fn new(interval: Duration, children: Vec<impl Into<Element<'a, Message, Theme>>>) -> Self {
        Carousel {
            interval,
            children: children.into_iter().map(|child| child.into()).collect(),
        }
    }
}

struct CarouselState {
    last_transition: Instant,
    current: usize,
}

impl CarouselState {
    fn new() -> Self {
        Self {
            last_transition: Instant::now(),
            current: 0,
        }
    }
}

impl<'a, Message, Theme> Widget<Message, Theme, Renderer> for Carousel<'a, Message, Theme>
where
    Message: 'a + Clone,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<CarouselState>()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(self.children.as_slice());
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn state(&self) -> tree::State {
        tree::State::new(CarouselState::new())
    }

    fn size(&self) -> Size<Length> {
        // The node size is taken from the current child at layout time.
        Size {
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let current = tree.state.downcast_ref::<CarouselState>().current;
        let child_nodes: Vec<_> = self
            .children
            .iter()
            .zip(tree.children.iter_mut())
            .map(|(child, child_tree)| child.as_widget().layout(child_tree, renderer, limits))
            .collect();
        let size = child_nodes
            .get(current)
            .map(|node| node.size())
            .unwrap_or(Size::ZERO);
        layout::Node::with_children(size, child_nodes)
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<CarouselState>();
        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            if !self.children.is_empty() && now.duration_since(state.last_transition) > self.interval
            {
                state.last_transition = now;
                state.current = (state.current + 1) % self.children.len();
            }
            shell.request_redraw(window::RedrawRequest::NextFrame);
        }
        event::Status::Ignored
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<CarouselState>();
        if let (Some(current), Some(current_layout), Some(current_tree)) = (
            self.children.get(state.current),
            layout.children().nth(state.current),
            tree.children.get(state.current),
        ) {
            current.as_widget().draw(
                current_tree,
                renderer,
                theme,
                style,
                current_layout,
                cursor,
                viewport,
            );
        }
    }
}

impl<'a, Message, Theme> From<Carousel<'a, Message, Theme>> for Element<'a, Message, Theme>
where
    Message: 'a + Clone,
    Theme: 'a,
{
    fn from(carousel: Carousel<'a, Message, Theme>) -> Self {
        Element::new(carousel)
    }
}

/// Three dots filling up in turn, used in place of a busy button label.
pub fn dots<'a, Message: 'a + Clone>() -> Carousel<'a, Message, crate::theme::Theme> {
    Carousel::new(
        Duration::from_millis(300),
        vec![
            text::p1_bold("•    "),
            text::p1_bold("• •  "),
            text::p1_bold("• • •"),
        ],
    )
}
