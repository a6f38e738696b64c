use miette::SourceSpan;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl From<(usize, usize)> for Span {
    fn from((start, length): (usize, usize)) -> Self {
        Span { start, length }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.length).into()
    }
}

#[macro_export]
macro_rules! span {
    (absolute; $start:expr, $len:expr) => {
        $crate::shared::span::Span::from(($start, $len))
    };

    ($start:expr, $end:expr) => {
        $crate::shared::span::Span::from(($start, $end - $start))
    };
}

#[cfg(test)]
mod tests {
    use super::Span;
    use miette::SourceSpan;

    #[test]
    fn span_from_bounds() {
        let span: Span = span!(4, 9);
        assert_eq!(span, Span { start: 4, length: 5 });

        let span: Span = span!(absolute; 4, 2);
        assert_eq!(span, Span { start: 4, length: 2 });

        let source: SourceSpan = span.into();
        assert_eq!(source.offset(), 4);
        assert_eq!(source.len(), 2);
    }
}
