use crate::var::Var;
use std::fmt;

impl fmt::Display for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.value(), self.grad())
    }
}

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.read_nodes();
        let node = &nodes[self.id.0];
        write!(
            f,
            "Var({}, op='{}', value={}, grad={}, children={:?})",
            self.id,
            node.operation(),
            node.value,
            node.grad,
            node.children()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn test_display() {
        let graph = Graph::new();
        let a = graph.var(2.5);
        assert_eq!(a.to_string(), "Value(data=2.5, grad=0)");
    }

    #[test]
    fn test_debug_shows_provenance() {
        let graph = Graph::new();
        let a = graph.var(1.0);
        let b = graph.var(2.0);
        let c = a * b;
        assert_eq!(
            format!("{:?}", c),
            "Var(#2, op='*', value=2, grad=0, children=[NodeId(0), NodeId(1)])"
        );
    }
}
