/*!
 * Integration tests for the full reflow pipeline
 */

use reflow_mobile::reflow::{FlowLine, ReflowSettings, is_structured};
use reflow_mobile::{MarkupNode, ReflowEngine, StyleTier};

use crate::common;

fn text_lines(lines: &[FlowLine]) -> Vec<&str> {
    lines.iter().filter(|l| !l.is_blank()).map(|l| l.text()).collect()
}

/// Test that every output line is short, or was passed through untouched
#[test]
fn test_reflowLines_withSampleArticle_shouldBoundEveryReflowedLine() {
    common::init_test_logger();
    let engine = ReflowEngine::new();
    let settings = ReflowSettings::default();

    let lines = engine.reflow_lines(common::SAMPLE_ARTICLE).unwrap();
    let raw_lines: Vec<&str> = common::SAMPLE_ARTICLE.lines().map(str::trim).collect();

    for line in text_lines(&lines) {
        let short = common::char_len(line) <= settings.min_reflow_length;
        let passed_through = is_structured(line) && raw_lines.contains(&line);
        assert!(short || passed_through, "unexpected long line: {:?}", line);
    }
}

/// Test that every line that needed segmenting comes out within the segment bound
#[test]
fn test_reflowLines_withLongProseLines_shouldRespectSegmentBound() {
    let engine = ReflowEngine::new();
    let settings = ReflowSettings::default();

    let long_prose = common::SAMPLE_ARTICLE
        .lines()
        .map(str::trim)
        .filter(|line| common::char_len(line) > settings.min_reflow_length && !is_structured(line))
        .collect::<Vec<_>>();
    assert_eq!(long_prose.len(), 2);

    for raw in long_prose {
        let lines = engine.reflow_lines(raw).unwrap();

        assert!(lines.len() > 1, "line was not segmented: {:?}", raw);
        for segment in text_lines(&lines) {
            assert!(
                common::char_len(segment) <= settings.max_segment_length(),
                "segment over bound: {:?}",
                segment
            );
        }
    }
}

/// Test that structured lines come out byte-for-byte
#[test]
fn test_reflowLines_withStructuredLines_shouldKeepThemVerbatim() {
    let engine = ReflowEngine::new();
    let lines = engine.reflow_lines(common::SAMPLE_ARTICLE).unwrap();
    let output = text_lines(&lines);

    for raw in common::SAMPLE_ARTICLE.lines().map(str::trim) {
        if is_structured(raw) {
            assert!(output.contains(&raw), "structured line changed: {:?}", raw);
        }
    }
}

/// Test that no two blank lines are adjacent after reflow
#[test]
fn test_reflowLines_withBlankRuns_shouldNeverEmitAdjacentBlanks() {
    let engine = ReflowEngine::new();
    let raw = format!("\n\n\n{}\n\n\n\n끝맺음\n\n", common::SAMPLE_ARTICLE);

    let lines = engine.reflow_lines(&raw).unwrap();

    assert!(lines.windows(2).all(|pair| !(pair[0].is_blank() && pair[1].is_blank())));
}

/// Test that the visible text survives reflow unchanged and in order
#[test]
fn test_reflowLines_shouldPreserveVisibleCharacters() {
    let engine = ReflowEngine::new();
    let lines = engine.reflow_lines(common::SAMPLE_ARTICLE).unwrap();

    let joined: String = text_lines(&lines).concat();
    assert_eq!(common::visible(&joined), common::visible(common::SAMPLE_ARTICLE));
}

/// Test that reflowing already-reflowed lines changes nothing
#[test]
fn test_reflowLines_appliedTwice_shouldBeStable() {
    let engine = ReflowEngine::new();

    let first = engine.reflow_lines(common::SAMPLE_ARTICLE).unwrap();
    let rejoined = first.iter().map(|l| l.text()).collect::<Vec<_>>().join("\n");
    let second = engine.reflow_lines(&rejoined).unwrap();

    assert_eq!(first, second);
}

/// Test the rendered document shape for the sample article
#[test]
fn test_tryReflow_withSampleArticle_shouldRenderHeadingsFirst() {
    let engine = ReflowEngine::new();
    let document = engine.try_reflow(common::SAMPLE_ARTICLE).unwrap();

    assert_eq!(
        document.nodes[0],
        MarkupNode::Heading {
            tier: StyleTier::Heading2,
            text: "모바일 글쓰기 안내".to_string()
        }
    );
    assert!(document.nodes.contains(&MarkupNode::Heading {
        tier: StyleTier::Heading3,
        text: "준비물".to_string()
    }));

    let markup = document.to_markup();
    assert!(markup.contains("<super_normal>핵심</super_normal>"));
    assert!(!markup.contains("**"));
    assert!(!markup.contains("<br/>\n<br/>"));
}

/// Test that the module-level helpers match a default engine
#[test]
fn test_reflowAndRestore_helpers_shouldMatchDefaultEngine() {
    let engine = ReflowEngine::default();

    assert_eq!(reflow_mobile::reflow(common::SAMPLE_ARTICLE), engine.reflow(common::SAMPLE_ARTICLE));
    assert_eq!(
        reflow_mobile::restore(common::SAMPLE_ARTICLE),
        reflow_mobile::reflow(common::SAMPLE_ARTICLE)
    );
}

/// Test that empty and whitespace-only input render to nothing or a single break
#[test]
fn test_reflow_withEmptyInput_shouldNotFail() {
    common::init_test_logger();
    let engine = ReflowEngine::new();

    assert_eq!(engine.reflow(""), "<br/>");
    assert_eq!(engine.reflow("\n\n  \n"), "<br/>");
}

/// Test that one engine can serve many threads with identical results
#[test]
fn test_reflow_fromManyThreads_shouldMatchSequentialResult() {
    let engine = ReflowEngine::new();
    let expected = engine.reflow(common::SAMPLE_ARTICLE);
    let shared = &engine;

    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || shared.reflow(common::SAMPLE_ARTICLE)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(results.iter().all(|result| *result == expected));
}

/// Test that a cut inside an emphasis run keeps both markers as literal text
#[test]
fn test_tryReflow_withCutInsideEmphasis_shouldKeepMarkersLiteral() {
    let engine = ReflowEngine::new();
    let raw = "오늘 소개할 방법은 **모바일 화면에서 긴 글을 편하게 읽는 요령**입니다";

    let document = engine.try_reflow(raw).unwrap();

    assert_eq!(
        document.to_markup(),
        "<normal>오늘 소개할 방법은 **모바일 화면에서 긴 글을</normal>\n<normal>편하게 읽는 요령**입니다</normal>"
    );
}
