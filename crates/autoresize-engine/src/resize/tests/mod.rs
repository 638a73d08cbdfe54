//! Document-level tests for the image rewriter.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::resize::{ResizeReport, resize_images_in_content, resize_images_in_content_with_report};
use crate::settings::ResizeSettings;

fn resize(content: &str) -> String {
    resize_images_in_content(content, &ResizeSettings::default())
}

fn resize_with(content: &str, image_width: u32, resize_url_width_params: bool) -> String {
    resize_images_in_content(
        content,
        &ResizeSettings::new(image_width, resize_url_width_params),
    )
}

// Wiki embeds

#[test]
fn wiki_adds_size() {
    assert_eq!(resize("![[test.jpg]]"), "![[test.jpg|150]]");
}

#[test]
fn wiki_replaces_existing_size() {
    assert_eq!(resize("![[test.jpg|300]]"), "![[test.jpg|150]]");
}

#[test]
fn wiki_drops_everything_after_first_pipe() {
    assert_eq!(resize("![[test.jpg|300|caption]]"), "![[test.jpg|150]]");
}

#[test]
fn wiki_handles_multiple_images() {
    assert_eq!(
        resize("![[image1.jpg]] Some text ![[image2.png]]"),
        "![[image1.jpg|150]] Some text ![[image2.png|150]]"
    );
}

#[rstest]
fn wiki_handles_every_image_format(
    #[values("jpg", "jpeg", "png", "gif", "webp", "svg")] format: &str,
) {
    assert_eq!(
        resize(&format!("![[test.{format}]]")),
        format!("![[test.{format}|150]]")
    );
}

#[rstest]
#[case("![[PHOTO.JPG]]", "![[PHOTO.JPG|150]]")]
#[case("![[shot.Png|20]]", "![[shot.Png|150]]")]
fn wiki_extension_is_case_insensitive(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resize(input), expected);
}

#[test]
fn wiki_handles_paths() {
    assert_eq!(
        resize("![[folder/subfolder/image.jpg]]"),
        "![[folder/subfolder/image.jpg|150]]"
    );
}

#[test]
fn wiki_keeps_spaces_in_filename() {
    assert_eq!(
        resize("![[Pasted image 20240101.png|200]]"),
        "![[Pasted image 20240101.png|150]]"
    );
}

#[test]
fn wiki_ignores_non_image_embeds() {
    let input = "![[meeting notes]] ![[diagram.pdf]] [[photo.png]]";
    assert_eq!(resize(input), input);
}

// Current behavior: paths containing `]` are not recognized.
#[test]
fn wiki_path_with_closing_bracket_is_left_alone() {
    let input = "![[odd]name.png]]";
    assert_eq!(resize(input), input);
}

// Inline embeds

#[test]
fn inline_adds_size() {
    assert_eq!(resize("![alt text](test.jpg)"), "![alt text|150](test.jpg)");
}

#[test]
fn inline_replaces_existing_size() {
    assert_eq!(resize("![alt text|300](test.jpg)"), "![alt text|150](test.jpg)");
}

#[test]
fn inline_handles_empty_alt() {
    assert_eq!(resize("![](test.jpg)"), "![|150](test.jpg)");
}

#[test]
fn inline_handles_multiple_images() {
    assert_eq!(
        resize("![img1](image1.jpg) Some text ![img2](image2.png)"),
        "![img1|150](image1.jpg) Some text ![img2|150](image2.png)"
    );
}

#[test]
fn inline_handles_paths() {
    assert_eq!(
        resize("![My image](folder/subfolder/image.jpg)"),
        "![My image|150](folder/subfolder/image.jpg)"
    );
}

#[rstest]
fn inline_handles_every_image_format(
    #[values("jpg", "jpeg", "png", "gif", "webp", "svg")] format: &str,
) {
    assert_eq!(
        resize(&format!("![alt](test.{format})")),
        format!("![alt|150](test.{format})")
    );
}

#[test]
fn inline_keeps_query_and_fragment() {
    assert_eq!(
        resize("![chart](https://example.com/chart.svg?theme=dark#v2)"),
        "![chart|150](https://example.com/chart.svg?theme=dark#v2)"
    );
}

#[test]
fn inline_ignores_plain_links_and_other_files() {
    let input = "[link](url) ![report](report.pdf) [pic](pic.png)";
    assert_eq!(resize(input), input);
}

// URL width hints

#[test]
fn url_width_param_rewritten_when_enabled() {
    assert_eq!(
        resize_with(
            "![](https://substackcdn.com/image/fetch/w_424,c_limit/photo.jpeg)",
            150,
            true
        ),
        "![|150](https://substackcdn.com/image/fetch/w_150,c_limit/photo.jpeg)"
    );
}

#[test]
fn url_width_param_kept_when_disabled() {
    assert_eq!(
        resize_with(
            "![](https://substackcdn.com/image/fetch/w_424,c_limit/photo.jpeg)",
            150,
            false
        ),
        "![|150](https://substackcdn.com/image/fetch/w_424,c_limit/photo.jpeg)"
    );
}

#[rstest]
#[case("![a](img.png?width=300)", "![a|150](img.png?width=150)")]
#[case("![a](img.png?width:300)", "![a|150](img.png?width=150)")]
#[case("![a](img.png?w=300)", "![a|150](img.png?w=150)")]
#[case("![a](img.png?w:300)", "![a|150](img.png?w=150)")]
#[case("![a](img.png?h=300)", "![a|150](img.png?h=300)")]
fn url_width_param_forms(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resize(input), expected);
}

// Current behavior: only the highest-precedence form is rewritten.
#[test]
fn url_width_param_precedence() {
    assert_eq!(
        resize("![](https://cdn.example/w_424/pic.png?width=99&w=5)"),
        "![|150](https://cdn.example/w_150/pic.png?width=99&w=5)"
    );
    assert_eq!(
        resize("![](pic.png?width=99&w=5)"),
        "![|150](pic.png?width=150&w=5)"
    );
}

#[test]
fn url_width_param_next_to_non_ascii_letter() {
    assert_eq!(
        resize("![](https://cdn.example/caféw_424/pic.png)"),
        "![|150](https://cdn.example/caféw_150/pic.png)"
    );
}

#[test]
fn wiki_paths_never_get_url_rewriting() {
    assert_eq!(resize("![[w_424.png]]"), "![[w_424.png|150]]");
}

// Mixed content

#[test]
fn wiki_and_inline_in_same_content() {
    assert_eq!(
        resize("![[wiki.jpg]] and ![markdown](md.png)"),
        "![[wiki.jpg|150]] and ![markdown|150](md.png)"
    );
}

#[test]
fn non_image_content_is_untouched() {
    let input = "Regular text [[not an image]] and [link](url)";
    assert_eq!(resize(input), input);
}

#[test]
fn complex_document() {
    let input = "# Header
Some text ![[image1.jpg|200]] more text
Another paragraph ![alt](image2.png)
![[image3.gif]]";

    insta::assert_snapshot!(resize(input), @r"
    # Header
    Some text ![[image1.jpg|150]] more text
    Another paragraph ![alt|150](image2.png)
    ![[image3.gif|150]]
    ");
}

#[test]
fn mixed_document_changes_each_image_once() {
    let input = "Intro ![[cover.png|640]] then ![chart](charts/q3.svg) and [[Project Notes]].";

    let (output, report) =
        resize_images_in_content_with_report(input, &ResizeSettings::default());

    assert_eq!(
        output,
        "Intro ![[cover.png|150]] then ![chart|150](charts/q3.svg) and [[Project Notes]]."
    );
    assert_eq!(
        report,
        ResizeReport {
            wiki_images: 1,
            inline_images: 1,
            url_params_rewritten: 0,
        }
    );
    assert_eq!(report.total_images(), 2);
}

#[test]
fn inline_pass_runs_over_wiki_output() {
    let input = "![[wiki.jpg|300]] then ![md|10](https://cdn.example/w_424/md.png)";
    let (output, report) =
        resize_images_in_content_with_report(input, &ResizeSettings::default());

    assert_eq!(
        output,
        "![[wiki.jpg|150]] then ![md|150](https://cdn.example/w_150/md.png)"
    );
    assert_eq!(report.wiki_images, 1);
    assert_eq!(report.inline_images, 1);
    assert_eq!(report.url_params_rewritten, 1);
}

#[test]
fn wiki_form_wins_when_followed_by_parentheses() {
    assert_eq!(resize("![[a.png]](b.png)"), "![[a.png|150]](b.png)");
}

// Custom width

#[test]
fn uses_custom_width() {
    assert_eq!(resize_with("![[test.jpg]]", 300, true), "![[test.jpg|300]]");
}

#[test]
fn replaces_with_custom_width() {
    assert_eq!(
        resize_with("![[test.jpg|100]] ![alt|200](test2.png)", 500, true),
        "![[test.jpg|500]] ![alt|500](test2.png)"
    );
}

#[test]
fn zero_width_leaves_content_unchanged() {
    let input = "![[test.jpg|100]] ![alt|200](test2.png)";
    let (output, report) =
        resize_images_in_content_with_report(input, &ResizeSettings::new(0, true));

    assert_eq!(output, input);
    assert_eq!(report, ResizeReport::default());
}

// Edge cases

#[test]
fn empty_input() {
    assert_eq!(resize(""), "");
}

#[test]
fn unclosed_references_are_untouched() {
    let input = "![[broken.png and ![alt](broken.png";
    assert_eq!(resize(input), input);
}

#[rstest]
#[case("![[test.jpg]]")]
#[case("![[test.jpg|300|caption]]")]
#[case("![alt|300](test.jpg)")]
#[case("![](https://cdn.example/w_424/pic.png?width=99&w=5)")]
#[case("![](pic.png?Width:99)")]
#[case("![x](a|b.png) ![[PHOTO.JPG]] [[note]] [l](u)")]
#[case("# Header\n![[a.gif|1]]\n\n![b|2](c.webp)\n")]
#[case("no images at all")]
fn transform_is_idempotent(#[case] input: &str) {
    for settings in [
        ResizeSettings::default(),
        ResizeSettings::new(640, false),
    ] {
        let once = resize_images_in_content(input, &settings);
        let twice = resize_images_in_content(&once, &settings);
        assert_eq!(twice, once);
    }
}
