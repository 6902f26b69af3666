/// A tie-breaker which selects the first variable that it receives with the largest value.
///
/// For example, if there are two variables `x1` with value 5 and `x2` with value 5, and the
/// tie-breaker first receives `x1` and then `x2`, it will return `x1` because it was the first
/// variable with the maximum value (of 5 in this example) which was provided. Considering variables
/// in ascending order of their id therefore breaks ties in favour of the smallest id.
#[derive(Debug, Clone, Copy)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected variable, could be [None] if no variable has been considered yet
    selected_variable: Option<Var>,
    /// The selected value, could be [None] if no variable has been considered yet
    selected_value: Option<Value>,
}

impl<Var, Value> Default for InOrderTieBreaker<Var, Value> {
    fn default() -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> InOrderTieBreaker<Var, Value> {
    pub fn consider(&mut self, variable: Var, value: Value) {
        let is_better = self
            .selected_value
            .as_ref()
            .is_none_or(|selected_value| value > *selected_value);

        if is_better {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    /// Returns the selected variable and resets the tie-breaker.
    pub fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.selected_variable = None;
        self.selected_value = None;
        selected
    }
}
