use yew::prelude::*;
use yew_hooks::use_window_size;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width >= 1536.0 {
            Breakpoint::Xxl
        } else if width >= 1280.0 {
            Breakpoint::Xl
        } else if width >= 1024.0 {
            Breakpoint::Lg
        } else if width >= 768.0 {
            Breakpoint::Md
        } else {
            Breakpoint::Sm
        }
    }
}

#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let (width, _) = use_window_size();
    Breakpoint::from_width(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(1280.0), Breakpoint::Xl);
        assert_eq!(Breakpoint::from_width(1536.0), Breakpoint::Xxl);
        assert!(Breakpoint::Lg > Breakpoint::Md);
    }
}
