/// Window surface request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub visible: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: String::from("Hello world!"),
            width: 512,
            height: 512,
            visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window() {
        let settings = WindowSettings::default();

        assert_eq!(settings.title, "Hello world!");
        assert_eq!((settings.width, settings.height), (512, 512));
        assert!(settings.visible);
    }
}
