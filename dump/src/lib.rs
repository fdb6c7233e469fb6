//! DICOM data set dumping library
//!
//! This is a helper library
//! for dumping the contents of decoded DICOM data sets and files
//! in a human readable way.
//!
//! # Examples
//!
//! A data set can be printed to any writer via [`dump_dataset`],
//! using a data dictionary to resolve attribute aliases.
//!
//! ```
//! use dcmcodec_core::{DataSet, Value, VR};
//! use dcmcodec_dictionary_std::{tags, StandardDataDictionary};
//! use dcmcodec_dump::{dump_dataset, ColorMode, DumpOptions};
//!
//! let mut dataset = DataSet::new();
//! dataset.put(tags::PATIENT_NAME, Value::str(VR::PN, "Doe^John")?);
//!
//! let mut out = Vec::new();
//! let options = DumpOptions::new().color_mode(ColorMode::Never);
//! dump_dataset(&mut out, &dataset, &StandardDataDictionary, &options)?;
//! assert!(String::from_utf8(out)?.contains("PatientName"));
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
//!
//! Files read with [`dcmcodec_parser::open_file`]
//! are dumped with [`dump_file`],
//! which also prints a summary of the file meta group.
//!
//! ```no_run
//! use dcmcodec_dictionary_std::StandardDataDictionary;
//! use dcmcodec_dump::{dump_file, DumpOptions};
//! use dcmcodec_parser::{open_file, ReadOptions};
//!
//! let file = open_file("path/to/file.dcm", ReadOptions::new())?;
//! let options = DumpOptions::new().width(100);
//! dump_file(std::io::stdout(), &file, &StandardDataDictionary, &options)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
use dcmcodec_core::dataset::Group;
use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::{DataSet, Tag, Value, VR};
use dcmcodec_dictionary_std::tags;
use dcmcodec_parser::FileDataSet;
use owo_colors::{OwoColorize, Stream, Style};
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io::{Result as IoResult, Write};
use std::str::FromStr;

/// Options and flags to configure how to dump a DICOM data set.
///
/// # Example
///
/// ```
/// use dcmcodec_dump::{ColorMode, DumpOptions};
///
/// let options = DumpOptions::new()
///     // maximum 120 characters per line
///     .width(120)
///     // never print colored output
///     .color_mode(ColorMode::Never)
///     // skip the file meta group
///     .no_meta(true);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct DumpOptions {
    /// whether to produce colored output
    pub color: ColorMode,
    /// the console width to assume when trimming long values,
    /// no trimming if `None`
    pub width: Option<u32>,
    /// do not print the file meta group
    pub no_meta: bool,
}

impl DumpOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximum output width in number of characters.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Print all values to the end, regardless of their length.
    ///
    /// This is the default behavior.
    pub fn no_limit(mut self) -> Self {
        self.width = None;
        self
    }

    /// Set whether to skip the file meta group
    /// when dumping a file.
    pub fn no_meta(mut self, no_meta: bool) -> Self {
        self.no_meta = no_meta;
        self
    }

    /// Set the output color mode.
    pub fn color_mode(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    fn apply_color_mode(&self) {
        match self.color {
            ColorMode::Never => owo_colors::set_override(false),
            ColorMode::Always => owo_colors::set_override(true),
            ColorMode::Auto => owo_colors::unset_override(),
        }
    }
}

/// Enumeration of output coloring modes.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ColorMode {
    /// Produce colored output if supported by standard output
    /// (namely, if it is a terminal).
    ///
    /// This is the default behavior.
    #[default]
    Auto,
    /// Never produce colored output.
    Never,
    /// Always produce colored output.
    Always,
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Never => f.write_str("never"),
            ColorMode::Auto => f.write_str("auto"),
            ColorMode::Always => f.write_str("always"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ColorModeError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            _ => Err(ColorModeError),
        }
    }
}

/// The error raised when providing an invalid color mode.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ColorModeError;

impl Display for ColorModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("invalid color mode")
    }
}

impl std::error::Error for ColorModeError {}

/// How a piece of output is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Tag,
    Alias,
    Number,
    Text,
    Temporal,
    Invalid,
    Absent,
}

impl Role {
    fn style(self) -> Style {
        match self {
            Role::Tag => Style::new().dimmed(),
            Role::Alias => Style::new().bold(),
            Role::Number => Style::new().cyan(),
            Role::Text => Style::new().yellow(),
            Role::Temporal => Style::new().green(),
            Role::Invalid => Style::new().red(),
            Role::Absent => Style::new().italic(),
        }
    }
}

/// Output content in a given role.
/// Padding is applied before styling,
/// so that escape codes do not break column alignment.
#[derive(Debug, Clone, Copy)]
struct Painted<T>(Role, T);

impl<T> Display for Painted<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Painted(role, content) = self;
        let text = match f.width() {
            Some(width) => format!("{:width$}", content, width = width),
            None => content.to_string(),
        };
        let style = Role::style(*role);
        write!(
            f,
            "{}",
            text.if_supports_color(Stream::Stdout, |t| t.style(style))
        )
    }
}

/// Dump the elements of a data set to the given writer,
/// one line per element.
///
/// Sequence items are listed below their sequence element,
/// indented by nesting depth.
pub fn dump_dataset<W, D>(
    mut to: W,
    dataset: &DataSet,
    dict: &D,
    options: &DumpOptions,
) -> IoResult<()>
where
    W: Write,
    D: ?Sized + DataDictionary,
{
    options.apply_color_mode();
    dump(&mut to, dataset, dict, options.width, 0)
}

/// Dump the contents of a DICOM file to the given writer.
///
/// A summary of the file meta group is printed first,
/// unless disabled via [`DumpOptions::no_meta`].
pub fn dump_file<W, D>(
    mut to: W,
    file: &FileDataSet,
    dict: &D,
    options: &DumpOptions,
) -> IoResult<()>
where
    W: Write,
    D: ?Sized + DataDictionary,
{
    options.apply_color_mode();
    if !options.no_meta {
        meta_dump(&mut to, file)?;
        writeln!(to, "{:-<58}", "")?;
    }
    dump(&mut to, &file.dataset, dict, options.width, 0)
}

fn meta_dump<W>(to: &mut W, file: &FileDataSet) -> IoResult<()>
where
    W: ?Sized + Write,
{
    let text = |tag: Tag| -> Option<String> {
        file.meta.get_first(tag).map(|value| value.to_string())
    };

    let ts = file.transfer_syntax;
    let lines = [
        (
            "Media Storage SOP Class UID",
            Some(text(tags::MEDIA_STORAGE_SOP_CLASS_UID).unwrap_or_default()),
        ),
        (
            "Media Storage SOP Instance UID",
            Some(text(tags::MEDIA_STORAGE_SOP_INSTANCE_UID).unwrap_or_default()),
        ),
        (
            "Transfer Syntax",
            Some(format!("{} ({})", ts.uid(), ts.name())),
        ),
        (
            "Implementation Class UID",
            text(tags::IMPLEMENTATION_CLASS_UID),
        ),
        (
            "Implementation version name",
            text(tags::IMPLEMENTATION_VERSION_NAME),
        ),
    ];
    for (label, value) in lines {
        if let Some(value) = value {
            writeln!(to, "{}: {}", Painted(Role::Alias, label), value)?;
        }
    }

    writeln!(to)?;
    Ok(())
}

fn dump<W, D>(
    to: &mut W,
    dataset: &DataSet,
    dict: &D,
    width: Option<u32>,
    depth: u32,
) -> IoResult<()>
where
    W: ?Sized + Write,
    D: ?Sized + DataDictionary,
{
    for (tag, group) in dataset.groups() {
        dump_element(&mut *to, tag, group, dict, width, depth)?;
    }

    Ok(())
}

fn dump_element<W, D>(
    to: &mut W,
    tag: Tag,
    group: Group<'_>,
    dict: &D,
    width: Option<u32>,
    depth: u32,
) -> IoResult<()>
where
    W: ?Sized + Write,
    D: ?Sized + DataDictionary,
{
    let vr = match group.first() {
        Some(value) => value.vr(),
        None => return Ok(()),
    };
    let indent = "  ".repeat(depth as usize);
    let alias: Cow<str> = dict
        .by_tag(tag)
        .map(|e| e.alias.clone())
        .unwrap_or(Cow::Borrowed("«Unknown Attribute»"));
    let head = format!(
        "{}{} {:28} {}",
        indent,
        Painted(Role::Tag, tag),
        Painted(Role::Alias, &*alias),
        vr
    );

    if vr == VR::SQ {
        let items: Vec<&DataSet> = group
            .values()
            .filter_map(|v| v.as_sequence().ok())
            .flatten()
            .collect();
        let plural = if items.len() == 1 { "" } else { "s" };
        writeln!(to, "{} ({} Item{})", head, items.len(), plural)?;
        for item in items {
            dump_item(&mut *to, item, dict, width, depth + 1)?;
        }
        return delimiter(to, &indent, "(FFFE,E0DD)", "SequenceDelimitationItem");
    }

    if tag == Tag::PIXEL_DATA && vr == VR::OB && group.len() > 1 {
        writeln!(to, "{} (PixelSequence, {} Fragments)", head, group.len())?;
        let max_characters = width.map(|w| w.saturating_sub(38 + depth * 2));
        for fragment in group.values() {
            let bytes = fragment.as_bytes().unwrap_or_default();
            writeln!(
                to,
                "{}  {} pi ({:>3} bytes): {}",
                indent,
                Painted(Role::Tag, "(FFFE,E000)"),
                bytes.len(),
                Painted(Role::Number, hex_list(bytes, 2, max_characters)),
            )?;
        }
        return Ok(());
    }

    // binary values are always shown as a single value
    let vm = match vr {
        VR::OB | VR::OW | VR::UN => 1,
        _ => group.len(),
    };
    let max_characters = width.map(|w| w.saturating_sub(50 + depth * 2));
    writeln!(
        to,
        "{} ({}): {}",
        head,
        vm,
        value_summary(group, vr, max_characters)
    )
}

fn dump_item<W, D>(
    to: &mut W,
    item: &DataSet,
    dict: &D,
    width: Option<u32>,
    depth: u32,
) -> IoResult<()>
where
    W: ?Sized + Write,
    D: ?Sized + DataDictionary,
{
    let indent = "  ".repeat(depth as usize);
    writeln!(
        to,
        "{}{} na {}",
        indent,
        Painted(Role::Tag, "(FFFE,E000)"),
        Painted(Role::Alias, "Item"),
    )?;
    dump(to, item, dict, width, depth + 1)?;
    delimiter(to, &indent, "(FFFE,E00D)", "ItemDelimitationItem")
}

fn delimiter<W>(to: &mut W, indent: &str, tag: &str, alias: &str) -> IoResult<()>
where
    W: ?Sized + Write,
{
    writeln!(
        to,
        "{}{} {}",
        indent,
        Painted(Role::Tag, tag),
        Painted(Role::Alias, alias)
    )
}

fn value_summary(group: Group<'_>, vr: VR, max_characters: Option<u32>) -> Painted<String> {
    let values: Vec<&Value> = group.values().filter(|v| !v.is_empty()).collect();
    if values.is_empty() {
        return Painted(Role::Absent, "(no value)".to_string());
    }

    match vr {
        VR::OB | VR::UN => {
            let bytes = values.iter().flat_map(|v| v.as_bytes().unwrap_or_default());
            Painted(Role::Number, hex_list(bytes, 2, max_characters))
        }
        VR::OW => {
            let words = values.iter().flat_map(|v| v.as_words().unwrap_or_default());
            Painted(Role::Number, hex_list(words, 4, max_characters))
        }
        VR::DA => match values.iter().map(|v| v.to_date()).collect::<Result<Vec<_>, _>>() {
            Ok(dates) => Painted(Role::Temporal, value_list(dates, max_characters, false)),
            Err(_) => Painted(Role::Invalid, value_list(values, max_characters, true)),
        },
        VR::TM => match values.iter().map(|v| v.to_time()).collect::<Result<Vec<_>, _>>() {
            Ok(times) => Painted(Role::Temporal, value_list(times, max_characters, false)),
            Err(_) => Painted(Role::Invalid, value_list(values, max_characters, true)),
        },
        VR::AT => Painted(Role::Text, value_list(values, max_characters, false)),
        _ if vr.string_policy().is_some() => {
            Painted(Role::Text, value_list(values, max_characters, true))
        }
        _ => Painted(Role::Number, value_list(values, max_characters, false)),
    }
}

fn hex_list<I>(numbers: I, digits: usize, max_characters: Option<u32>) -> String
where
    I: IntoIterator,
    I::Item: fmt::UpperHex,
{
    value_list(
        numbers
            .into_iter()
            .map(|n| format!("{:0digits$X}", n, digits = digits)),
        max_characters,
        false,
    )
}

/// Print values as a comma separated list,
/// in brackets if there is more than one.
///
/// Stops taking values once `max_characters` is exceeded.
fn value_list<I>(values: I, max_characters: Option<u32>, quoted: bool) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut values = values.into_iter().peekable();
    let mut out = String::new();
    let mut count = 0;
    while let Some(value) = values.next() {
        if count > 0 {
            out.push_str(", ");
        }
        let piece = sanitize(&value.to_string());
        if quoted {
            out.push('"');
            out.push_str(&piece.replace('"', "\\\""));
            out.push('"');
        } else {
            out.push_str(&piece);
        }
        count += 1;
        if max_characters.map_or(false, |max| out.len() > max as usize) {
            break;
        }
    }
    if count > 1 || values.peek().is_some() {
        out = format!("[{}]", out);
    }

    match max_characters {
        Some(max) => ellipsize(&out, max).into_owned(),
        None => out,
    }
}

/// Replace line breaks and other control characters
/// with visible symbols.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' => '␊',
            '\r' => '␍',
            '\0' => '␀',
            c if c.is_control() => '�',
            c => c,
        })
        .collect()
}

fn ellipsize(text: &str, max_characters: u32) -> Cow<str> {
    let keep = max_characters.saturating_sub(3) as usize;
    match text.char_indices().nth(keep) {
        Some((end, _)) => Cow::Owned(format!("{}...", &text[..end])),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::{dump_dataset, dump_file, ellipsize, ColorMode, DumpOptions, Painted, Role};
    use dcmcodec_core::{DataSet, Tag, Value, VR};
    use dcmcodec_dictionary_std::{tags, StandardDataDictionary};
    use dcmcodec_encoding::transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN;
    use dcmcodec_parser::{read_file, write_file, ReadOptions, WriteMetaOptions};

    fn text(vr: VR, s: &str) -> Value {
        Value::str(vr, s).unwrap()
    }

    fn dump_lines(dataset: &DataSet, options: DumpOptions) -> Vec<String> {
        let mut out = Vec::new();
        dump_dataset(
            &mut out,
            dataset,
            &StandardDataDictionary,
            &options.color_mode(ColorMode::Never),
        )
        .unwrap();
        String::from_utf8(out)
            .expect("output is not valid UTF-8")
            .lines()
            .map(String::from)
            .collect()
    }

    fn check_line(line: &str, expected: (&str, &str, &str, &str)) {
        let parts: Vec<&str> = line.split(' ').filter(|p| !p.is_empty()).collect();
        let value = line.split_once(": ").unwrap().1.trim();
        assert_eq!(&parts[..3], &[expected.0, expected.1, expected.2]);
        assert_eq!(value, expected.3);
    }

    #[test]
    fn dump_dataset_covers_properties() {
        let dataset: DataSet = vec![
            (tags::SOP_INSTANCE_UID, Value::uid("1.2.888.123").unwrap()),
            (tags::STUDY_DATE, text(VR::DA, "20170101")),
            (tags::CONTENT_DATE, Value::empty(VR::DA)),
            (tags::MODALITY, text(VR::CS, "OT")),
            (tags::INSTITUTION_NAME, text(VR::LO, "Hospital")),
            (
                tags::INSTITUTION_ADDRESS,
                text(VR::ST, "Country Roads 1\nWest Virginia"),
            ),
            (tags::ROWS, Value::us(3)),
            (tags::ROWS, Value::us(4)),
        ]
        .into_iter()
        .collect();

        let lines = dump_lines(&dataset, DumpOptions::new());
        assert_eq!(lines.len(), 7);
        check_line(
            &lines[0],
            ("(0008,0018)", "SOPInstanceUID", "UI", "\"1.2.888.123\""),
        );
        check_line(&lines[1], ("(0008,0020)", "StudyDate", "DA", "2017-01-01"));
        check_line(&lines[2], ("(0008,0023)", "ContentDate", "DA", "(no value)"));
        check_line(&lines[3], ("(0008,0060)", "Modality", "CS", "\"OT\""));
        check_line(
            &lines[4],
            ("(0008,0080)", "InstitutionName", "LO", "\"Hospital\""),
        );
        check_line(
            &lines[5],
            (
                "(0008,0081)",
                "InstitutionAddress",
                "ST",
                "\"Country Roads 1␊West Virginia\"",
            ),
        );
        check_line(&lines[6], ("(0028,0010)", "Rows", "US", "[3, 4]"));
    }

    #[test]
    fn nested_items_are_indented() {
        let item: DataSet = vec![(tags::CODE_VALUE, text(VR::SH, "121071"))]
            .into_iter()
            .collect();
        let dataset: DataSet = vec![(tags::CONTENT_SEQUENCE, Value::sequence(vec![item]))]
            .into_iter()
            .collect();

        let lines = dump_lines(&dataset, DumpOptions::new());
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("(0040,A730) ContentSequence"));
        assert!(lines[0].ends_with("SQ (1 Item)"));
        assert_eq!(lines[1], "  (FFFE,E000) na Item");
        assert!(lines[2].starts_with("    (0008,0100) CodeValue"));
        assert_eq!(lines[3], "  (FFFE,E00D) ItemDelimitationItem");
        assert_eq!(lines[4], "(FFFE,E0DD) SequenceDelimitationItem");
    }

    #[test]
    fn unknown_attributes_and_fragments() {
        let dataset: DataSet = vec![
            (Tag(0x0019, 0x1001), Value::un(vec![0xAB, 0xCD])),
            (Tag::PIXEL_DATA, Value::ob(vec![0xFF, 0xD8])),
            (Tag::PIXEL_DATA, Value::ob(vec![0xFF, 0xD9])),
        ]
        .into_iter()
        .collect();

        let lines = dump_lines(&dataset, DumpOptions::new());
        check_line(
            &lines[0],
            ("(0019,1001)", "«Unknown", "Attribute»", "[AB, CD]"),
        );
        assert!(lines[1].ends_with("OB (PixelSequence, 2 Fragments)"));
        assert_eq!(lines[2], "  (FFFE,E000) pi (  2 bytes): [FF, D8]");
        assert_eq!(lines[3], "  (FFFE,E000) pi (  2 bytes): [FF, D9]");
    }

    #[test]
    fn long_values_are_cut_to_width() {
        let dataset: DataSet = vec![(tags::IMAGE_COMMENTS, text(VR::LT, &"a".repeat(200)))]
            .into_iter()
            .collect();

        let lines = dump_lines(&dataset, DumpOptions::new().width(80));
        assert!(lines[0].ends_with("..."));
        assert!(lines[0].chars().count() < 100);

        let lines = dump_lines(&dataset, DumpOptions::new());
        assert!(lines[0].ends_with(&format!("{}\"", "a".repeat(200))));
    }

    #[test]
    fn dump_file_prints_meta_summary() {
        let dataset: DataSet = vec![
            (tags::SOP_CLASS_UID, Value::uid("1.2.840.10008.5.1.4.1.1.1").unwrap()),
            (tags::SOP_INSTANCE_UID, Value::uid("1.2.888.123").unwrap()),
        ]
        .into_iter()
        .collect();
        let bytes = write_file(
            &dataset,
            &IMPLICIT_VR_LITTLE_ENDIAN,
            &WriteMetaOptions::default(),
        )
        .unwrap();
        let file = read_file(&bytes, ReadOptions::new()).unwrap();

        let mut out = Vec::new();
        let options = DumpOptions::new().color_mode(ColorMode::Never);
        dump_file(&mut out, &file, &StandardDataDictionary, &options).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(
            lines[0],
            "Media Storage SOP Class UID: 1.2.840.10008.5.1.4.1.1.1"
        );
        assert_eq!(lines[1], "Media Storage SOP Instance UID: 1.2.888.123");
        assert_eq!(
            lines[2],
            "Transfer Syntax: 1.2.840.10008.1.2 (Implicit VR Little Endian)"
        );
        assert!(lines[3].starts_with("Implementation Class UID: "));
        assert!(lines[4].starts_with("Implementation version name: "));
        assert_eq!(lines[5], "");
        assert_eq!(
            lines[6],
            "----------------------------------------------------------"
        );
        assert!(lines[7].starts_with("(0008,0016) SOPClassUID"));

        let mut out = Vec::new();
        let options = options.no_meta(true);
        dump_file(&mut out, &file, &StandardDataDictionary, &options).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("(0008,0016) SOPClassUID"));
    }

    #[test]
    fn painted_values_pad_before_styling() {
        owo_colors::set_override(false);
        assert_eq!(format!("{:6}|", Painted(Role::Alias, "ab")), "ab    |");
        assert_eq!(format!("{}", Painted(Role::Invalid, 42)), "42");
    }

    #[test]
    fn ellipsis_counts_characters() {
        assert_eq!(ellipsize("abcdef", 10), "abcdef");
        assert_eq!(ellipsize("abcdefghijkl", 10), "abcdefg...");
        assert_eq!(ellipsize("ééééééééééé", 6), "ééé...");
    }
}
