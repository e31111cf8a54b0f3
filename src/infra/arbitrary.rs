use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{core::marker::EdgeType, graph::Graph};

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<T> {
    AddNode(T),
    AddEdge(T, T),
}

impl<T: Ord + Clone> MutOp<T> {
    pub fn apply<Ty: EdgeType>(self, graph: &mut Graph<T, Ty>) {
        match self {
            MutOp::AddNode(node) => graph.add_node(node),
            MutOp::AddEdge(tail, head) => graph.add_edge(tail, head),
        }
    }
}

#[derive(Clone)]
pub struct MutOpsSeq<T>(pub Vec<MutOp<T>>);

impl<T> IntoIterator for MutOpsSeq<T> {
    type Item = MutOp<T>;
    type IntoIter = std::vec::IntoIter<MutOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Ord + Clone> MutOpsSeq<T> {
    pub fn replay<Ty: EdgeType>(self, graph: &mut Graph<T, Ty>)
    where
        T: fmt::Debug,
    {
        println!("let mut graph = Graph::new();");
        println!();

        for op in self {
            match &op {
                MutOp::AddNode(node) => println!("graph.add_node({node:?});"),
                MutOp::AddEdge(tail, head) => println!("graph.add_edge({tail:?}, {head:?});"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<T: fmt::Debug> fmt::Debug for MutOpsSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

impl<'a, T> Arbitrary<'a> for MutOpsSeq<T>
where
    T: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut seq = Vec::new();

        while !u.is_empty() {
            match arbitrary_op(u) {
                Ok(op) => seq.push(op),
                Err(_) => break,
            }
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, T>(u: &mut Unstructured<'a>) -> arbitrary::Result<MutOp<T>>
where
    T: Arbitrary<'a>,
{
    // Edges are preferred over isolated nodes, the latter are still needed to
    // exercise unreachable goals.
    if u.ratio(1u8, 8u8)? {
        Ok(MutOp::AddNode(u.arbitrary()?))
    } else {
        Ok(MutOp::AddEdge(u.arbitrary()?, u.arbitrary()?))
    }
}

impl<'a, T, Ty> Arbitrary<'a> for Graph<T, Ty>
where
    T: Arbitrary<'a> + Ord + Clone,
    Ty: EdgeType,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut graph = Graph::new();

        for op in MutOpsSeq::<T>::arbitrary(u)? {
            op.apply(&mut graph);
        }

        Ok(graph)
    }
}
