use std::marker::PhantomData;

use crate::Stage;

/// A stage backed by a plain async function or closure.
pub struct FnStage<F, In, Out> {
    func: F,
    _marker: PhantomData<fn(In) -> Out>,
}

/// Wraps `func` as a [`Stage`], typically a downstream collaborator such as
/// a model call.
pub fn stage_fn<F, Fut, In, Out>(func: F) -> FnStage<F, In, Out>
where
    F: Fn(In) -> Fut,
    Fut: Future<Output = anyhow::Result<Out>>,
{
    FnStage { func, _marker: PhantomData }
}

impl<F, Fut, In, Out> Stage for FnStage<F, In, Out>
where
    F: Fn(In) -> Fut,
    Fut: Future<Output = anyhow::Result<Out>>,
{
    type In = In;
    type Out = Out;

    async fn run(&self, input: Self::In) -> anyhow::Result<Self::Out> {
        (self.func)(input).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_closure_stage() {
        let stage = stage_fn(|input: String| async move { anyhow::Ok(input.len()) });
        let actual = stage.run("four".to_string()).await.unwrap();
        assert_eq!(actual, 4);
    }
}
