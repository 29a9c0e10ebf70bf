use image::Rgb;
use libwamap::{ConvertOptions, MaxColours, OptionError, parse_channel};
use std::path::{Path, PathBuf};
use wa_map_maker::locate::suggest_output_path;

/// Raw contents of the conversion form, exactly as typed.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct Form {
    pub(crate) input: String,
    pub(crate) template: String,
    pub(crate) output: String,
    pub(crate) max_colours: String,
    pub(crate) colour: [String; 3],
    pub(crate) no_transparency: bool,
    pub(crate) dither: bool,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            input: String::new(),
            template: String::new(),
            output: String::new(),
            max_colours: MaxColours::default().to_string(),
            colour: ["0".into(), "0".into(), "0".into()],
            no_transparency: false,
            dither: false,
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FormError {
    #[error("Please choose an input image.")]
    MissingInput,
    #[error("Please choose where to save the output PNG.")]
    MissingOutput,
    #[error("Max colours must be an integer between 1 and {}.", MaxColours::MAX)]
    MaxColours,
    #[error("Transparent colour must be three integers (0-255).")]
    Colour,
    #[error("Transparent colour values must be between 0 and 255.")]
    ColourRange,
}

impl FormError {
    pub(crate) const fn title(&self) -> &'static str {
        match self {
            Self::MissingInput => "Missing input",
            Self::MissingOutput => "Missing output",
            Self::MaxColours => "Invalid max colours",
            Self::Colour | Self::ColourRange => "Invalid colour",
        }
    }
}

/// A validated conversion request.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct Request {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) template: Option<PathBuf>,
    pub(crate) options: ConvertOptions,
}

impl Form {
    /// Sets the input and proposes an output name for it.
    pub(crate) fn pick_input(&mut self, path: &Path, saved_levels: Option<&Path>) {
        self.input = path.display().to_string();
        self.output = suggest_output_path(path, saved_levels)
            .display()
            .to_string();
    }

    /// Directory the save dialog should open in.
    pub(crate) fn output_dir(&self, saved_levels: Option<&Path>) -> PathBuf {
        match saved_levels {
            Some(dir) => dir.to_path_buf(),
            None => Path::new(self.input.trim())
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf(),
        }
    }

    /// File name the save dialog should propose.
    pub(crate) fn output_file_name(&self) -> String {
        Path::new(self.output.trim())
            .file_name()
            .map_or_else(|| "converted.png".into(), |n| n.to_string_lossy().into_owned())
    }

    /// Checks the fields in the order they appear on screen.
    ///
    /// An empty output is filled in from `saved_levels` when it is known.
    pub(crate) fn validate(&mut self, saved_levels: Option<&Path>) -> Result<Request, FormError> {
        let input = self.input.trim();
        if input.is_empty() {
            return Err(FormError::MissingInput);
        }
        let input = PathBuf::from(input);
        if self.output.trim().is_empty() {
            let Some(saved_levels) = saved_levels else {
                return Err(FormError::MissingOutput);
            };
            self.output = suggest_output_path(&input, Some(saved_levels))
                .display()
                .to_string();
        }
        let max_colours = self
            .max_colours
            .parse::<MaxColours>()
            .map_err(|_| FormError::MaxColours)?;
        let transparent_colour = if self.no_transparency {
            None
        } else {
            Some(self.parse_colour()?)
        };
        let template = Some(self.template.trim())
            .filter(|t| !t.is_empty())
            .map(PathBuf::from);
        Ok(Request {
            input,
            output: PathBuf::from(self.output.trim()),
            template,
            options: ConvertOptions::builder()
                .max_colours(max_colours)
                .transparent_colour(transparent_colour)
                .dither(self.dither)
                .build(),
        })
    }

    fn parse_colour(&self) -> Result<Rgb<u8>, FormError> {
        let parsed = self.colour.each_ref().map(|c| parse_channel(c));
        if parsed.contains(&Err(OptionError::Colour)) {
            return Err(FormError::Colour);
        }
        match parsed {
            [Ok(r), Ok(g), Ok(b)] => Ok(Rgb([r, g, b])),
            _ => Err(FormError::ColourRange),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Form {
        Form {
            input: "pics/cat.jpg".into(),
            output: "out.png".into(),
            ..Form::default()
        }
    }

    #[test]
    fn defaults_are_valid() {
        let request = filled().validate(None).unwrap();
        assert_eq!(request.input, Path::new("pics/cat.jpg"));
        assert_eq!(request.output, Path::new("out.png"));
        assert_eq!(request.template, None);
        assert_eq!(request.options, ConvertOptions::default());
    }

    #[test]
    fn missing_input_is_checked_first() {
        let mut form = Form {
            max_colours: "0".into(),
            ..Form::default()
        };
        assert_eq!(form.validate(None), Err(FormError::MissingInput));
    }

    #[test]
    fn missing_output_without_saved_levels() {
        let mut form = Form {
            output: "  ".into(),
            ..filled()
        };
        assert_eq!(form.validate(None), Err(FormError::MissingOutput));
    }

    #[test]
    fn missing_output_is_filled_from_saved_levels() {
        let mut form = Form {
            output: String::new(),
            ..filled()
        };
        let request = form.validate(Some(Path::new("levels"))).unwrap();
        assert_eq!(request.output, Path::new("levels/cat_wa.png"));
        assert_eq!(Path::new(&form.output), Path::new("levels/cat_wa.png"));
    }

    #[test]
    fn max_colours_range() {
        for value in ["0", "113", "abc", ""] {
            let mut form = Form {
                max_colours: value.into(),
                ..filled()
            };
            assert_eq!(form.validate(None), Err(FormError::MaxColours), "{value}");
        }
    }

    #[test]
    fn colour_errors() {
        let mut form = Form {
            colour: ["300".into(), "x".into(), "0".into()],
            ..filled()
        };
        assert_eq!(form.validate(None), Err(FormError::Colour));
        form.colour = ["300".into(), "0".into(), "0".into()];
        assert_eq!(form.validate(None), Err(FormError::ColourRange));
        form.colour = ["255".into(), "0".into(), "255".into()];
        let request = form.validate(None).unwrap();
        assert_eq!(
            request.options.transparent_colour(),
            Some(Rgb([255, 0, 255]))
        );
    }

    #[test]
    fn disabled_transparency_skips_colour() {
        let mut form = Form {
            colour: ["bad".into(), String::new(), String::new()],
            no_transparency: true,
            dither: true,
            template: " tpl.png ".into(),
            ..filled()
        };
        let request = form.validate(None).unwrap();
        assert_eq!(request.options.transparent_colour(), None);
        assert!(request.options.dither());
        assert_eq!(request.template.as_deref(), Some(Path::new("tpl.png")));
    }

    #[test]
    fn picking_input_suggests_output() {
        let mut form = Form::default();
        form.pick_input(Path::new("pics/cat.jpg"), None);
        assert_eq!(Path::new(&form.output), Path::new("pics/cat_wa.png"));
        assert_eq!(form.output_file_name(), "cat_wa.png");
        assert_eq!(form.output_dir(None), Path::new("pics"));
        assert_eq!(form.output_dir(Some(Path::new("lv"))), Path::new("lv"));
    }

    #[test]
    fn empty_form_dialog_defaults() {
        let form = Form::default();
        assert_eq!(form.output_file_name(), "converted.png");
        assert_eq!(form.output_dir(None), Path::new("."));
    }
}
