/// An asynchronous step of a message pipeline.
///
/// A stage is a deferred operation: building one does no work, and the same
/// stage can be run any number of times.
pub trait Stage {
    type In;
    type Out;

    fn run(&self, input: Self::In) -> impl Future<Output = anyhow::Result<Self::Out>>;
}

/// Composition for stages, available on every [`Stage`].
pub trait StageExt: Sized {
    /// Feeds the output of `self` into `other`. Errors from either stage are
    /// returned as-is.
    fn pipe<Other>(self, other: Other) -> Pipe<Self, Other> {
        Pipe(self, other)
    }
}

impl<T: Stage> StageExt for T {}

/// Two stages run back to back, for example message parsing followed by the
/// run merge, or the merge followed by a model call. The second stage only
/// runs when the first succeeds.
pub struct Pipe<T1, T2>(T1, T2);

impl<T1: Stage, T2: Stage> Stage for Pipe<T1, T2>
where
    T1::Out: Into<T2::In>,
{
    type In = T1::In;
    type Out = T2::Out;

    async fn run(&self, input: Self::In) -> anyhow::Result<Self::Out> {
        let intermediate = self.0.run(input).await?;
        self.1.run(intermediate.into()).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Double;

    impl Stage for Double {
        type In = u32;
        type Out = u32;

        async fn run(&self, input: Self::In) -> anyhow::Result<Self::Out> {
            Ok(input * 2)
        }
    }

    struct Fail;

    impl Stage for Fail {
        type In = u32;
        type Out = u32;

        async fn run(&self, _input: Self::In) -> anyhow::Result<Self::Out> {
            anyhow::bail!("stage failed")
        }
    }

    #[tokio::test]
    async fn test_pipe_runs_stages_in_order() {
        let pipeline = Double.pipe(Double).pipe(Double);
        let actual = pipeline.run(3).await.unwrap();
        assert_eq!(actual, 24);
    }

    #[tokio::test]
    async fn test_pipe_is_reusable() {
        let pipeline = Double.pipe(Double);
        assert_eq!(pipeline.run(1).await.unwrap(), 4);
        assert_eq!(pipeline.run(2).await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_pipe_stops_at_first_error() {
        let pipeline = Fail.pipe(Double);
        let actual = pipeline.run(1).await.unwrap_err();
        assert_eq!(actual.to_string(), "stage failed");
    }
}
