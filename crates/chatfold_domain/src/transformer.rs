use std::marker::PhantomData;

/// A synchronous, composable rewrite of a value.
///
/// Transformers are chained with [`Transformer::pipe`] and guarded with
/// [`Transformer::when`]; the combined transformer runs each step in order
/// on the output of the previous one.
pub trait Transformer: Sized {
    type Value;

    fn transform(&mut self, value: Self::Value) -> Self::Value;

    fn pipe<Other>(self, other: Other) -> Pipe<Self, Other>
    where
        Other: Transformer<Value = Self::Value>,
    {
        Pipe(self, other)
    }

    fn when<F>(self, condition: F) -> Cond<Self, F>
    where
        F: Fn(&Self::Value) -> bool,
    {
        Cond(self, condition)
    }
}

/// Identity transformation, the starting point of a pipeline.
pub struct DefaultTransformation<T>(PhantomData<T>);

impl<T> DefaultTransformation<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for DefaultTransformation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Transformer for DefaultTransformation<T> {
    type Value = T;

    fn transform(&mut self, value: Self::Value) -> Self::Value {
        value
    }
}

pub struct Pipe<A, B>(A, B);

impl<A, B, V> Transformer for Pipe<A, B>
where
    A: Transformer<Value = V>,
    B: Transformer<Value = V>,
{
    type Value = V;

    fn transform(&mut self, value: Self::Value) -> Self::Value {
        let value = self.0.transform(value);
        self.1.transform(value)
    }
}

/// Applies the inner transformer only when the condition holds for the
/// incoming value.
pub struct Cond<T, F>(T, F);

impl<T, F> Transformer for Cond<T, F>
where
    T: Transformer,
    F: Fn(&T::Value) -> bool,
{
    type Value = T::Value;

    fn transform(&mut self, value: Self::Value) -> Self::Value {
        if (self.1)(&value) {
            self.0.transform(value)
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Append(&'static str);

    impl Transformer for Append {
        type Value = String;

        fn transform(&mut self, mut value: Self::Value) -> Self::Value {
            value.push_str(self.0);
            value
        }
    }

    #[test]
    fn test_default_transformation_is_identity() {
        let mut transformer = DefaultTransformation::<String>::new();
        let actual = transformer.transform("a".to_string());
        assert_eq!(actual, "a");
    }

    #[test]
    fn test_pipe_runs_in_order() {
        let mut transformer = Append("b").pipe(Append("c"));
        let actual = transformer.transform("a".to_string());
        assert_eq!(actual, "abc");
    }

    #[test]
    fn test_when_skips_on_false_condition() {
        let mut transformer = DefaultTransformation::<String>::new()
            .pipe(Append("!").when(|value: &String| value.is_empty()));

        assert_eq!(transformer.transform(String::new()), "!");
        assert_eq!(transformer.transform("a".to_string()), "a");
    }
}
