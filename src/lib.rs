pub mod color;
pub mod linear;
pub mod presenter;
pub mod radial;
pub mod stops;
pub mod syntax;

pub use linear::{LinearGradientState, PointPair};
pub use presenter::{LinearMsg, LinearPresenter, RadialMsg, RadialPresenter, StopMsg, StyleSink};
pub use radial::RadialGradientState;
pub use stops::{ColorStop, ColorStopList, StopError, StopId, MIN_STOPS};
pub use syntax::{GradientKind, LinearDirection, RepeatMode, RepeatSettings};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Stands in for the two preview shapes; both receive the same string,
    /// so one shared buffer is enough.
    #[derive(Clone, Default)]
    struct PreviewShapes {
        style: Rc<RefCell<String>>,
    }

    impl StyleSink for PreviewShapes {
        fn apply_style(&mut self, style: &str) {
            *self.style.borrow_mut() = format!("{}{}", syntax::BACKGROUND_PROP, style);
        }
    }

    #[test]
    fn test_linear_session_over_string_messages() {
        let preview = PreviewShapes::default();
        let mut presenter = LinearPresenter::new(preview.clone());

        // Initial state matches the tool's startup output.
        assert_eq!(
            *preview.style.borrow(),
            "-fx-background-color:linear-gradient(to bottom, #ffb6c1, #ffa500);"
        );

        // A host forwarding raw widget events as strings.
        let events = [
            "use-from:true",
            "from-x:10",
            "from-y:20",
            "to-x:80",
            "to-y:80",
            "repeat-mode:repeat",
        ];
        for event in events {
            let msg: LinearMsg = event.parse().expect("valid event");
            presenter.update(msg);
        }
        assert_eq!(
            *preview.style.borrow(),
            "-fx-background-color:linear-gradient(from 10% 20% to 80% 80%, repeat, #ffb6c1, #ffa500);"
        );

        // Leaving point mode falls back to the direction keyword.
        presenter.update("use-from:false".parse().unwrap());
        assert_eq!(
            presenter.syntax(),
            "linear-gradient(to bottom, repeat, #ffb6c1, #ffa500);"
        );
    }

    #[test]
    fn test_radial_session_with_stop_edits() {
        let preview = PreviewShapes::default();
        let mut presenter = RadialPresenter::new(preview.clone());
        assert_eq!(
            presenter.syntax(),
            "radial-gradient(focus-angle 0deg , focus-distance 0% , center 50% 50% , \
             radius 50% , #ffe4c4, #d2691e);"
        );

        let last = presenter.stops().iter().last().unwrap().0;
        presenter.update(RadialMsg::Stop(StopMsg::AddAfter(last)));
        let added = presenter.stops().iter().last().unwrap().0;
        assert!(presenter.can_delete());

        // A blank stop contributes nothing until it gets a color.
        assert_eq!(
            presenter.syntax(),
            "radial-gradient(focus-angle 0deg , focus-distance 0% , center 50% 50% , \
             radius 50% , #ffe4c4, #d2691e);"
        );

        presenter.update(RadialMsg::Stop(StopMsg::Color(added, "chocolate".into())));
        presenter.update(RadialMsg::Stop(StopMsg::Percent(added, 90)));
        assert_eq!(
            presenter.syntax(),
            "radial-gradient(focus-angle 0deg , focus-distance 0% , center 50% 50% , \
             radius 50% , #ffe4c4, #d2691e, #D2691E 90%);"
        );
        assert_eq!(
            *preview.style.borrow(),
            format!("{}{}", syntax::BACKGROUND_PROP, presenter.syntax())
        );
    }
}
