mod inspect;

/// A callable that maps a typed input to a typed output.
///
/// Components must be deterministic, always producing the same result for a
/// given input. They take their input by value, so a component can pass it
/// on without copying.
///
/// ## Observing Components
///
/// [`Component::inspect()`] wraps a component with handlers that see each
/// input and output. It is the hook for logging, tracing, or collecting
/// values in tests, and leaves the component's behavior unchanged.
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type to represent domain-specific
    /// failures. Components that cannot fail use [`std::convert::Infallible`].
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Inspects inputs and outputs without modifying behavior.
    ///
    /// # Parameters
    ///
    /// - `input_handler`: Called before execution to inspect the input.
    /// - `output_handler`: Called after a successful call to inspect the output.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_identity::{Component, IdentityOf};
    ///
    /// let logged = IdentityOf::<i32>::new().inspect(
    ///     |input| println!("Received: {input}"),
    ///     |output| println!("Produced: {output}"),
    /// );
    ///
    /// assert_eq!(logged.call(5), Ok(5));
    /// // Prints:
    /// // Received: 5
    /// // Produced: 5
    /// ```
    fn inspect<InputHandler, OutputHandler>(
        self,
        input_handler: InputHandler,
        output_handler: OutputHandler,
    ) -> impl Component<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        InputHandler: Fn(&Self::Input),
        OutputHandler: Fn(&Self::Output),
    {
        inspect::Inspect {
            component: self,
            input_handler,
            output_handler,
        }
    }
}
