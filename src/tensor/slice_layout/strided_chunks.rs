/// Iterator over the contiguous runs of a strided view, in row-major order.
///
/// The position of the next chunk is kept as a multi-index `counter`
/// that is advanced like an odometer: the trailing axes covered by a
/// chunk step by their full size, the others by one.
pub struct StridedChunks<'a, T> {
    data: &'a [T],
    offset: usize,
    shape: Vec<usize>,
    strides: Vec<usize>,
    counter: Vec<usize>,
    step_sizes: Vec<usize>,
    chunk_size: usize,
    dead: bool,
}

impl<'a, T> StridedChunks<'a, T> {
    pub fn new(
        data: &'a [T],
        offset: usize,
        shape: &[usize],
        strides: &[usize],
        num_elements: usize,
        chunk_size: usize,
    ) -> Self {
        let mut step_sizes = shape.to_vec();
        let mut remaining = chunk_size;

        step_sizes.iter_mut().rev().for_each(|x| {
            if *x > 0 && remaining >= *x && remaining % *x == 0 {
                remaining /= *x;
            } else {
                *x = remaining.max(1);
                remaining = 1;
            }
        });

        StridedChunks {
            data,
            offset,
            shape: shape.to_vec(),
            strides: strides.to_vec(),
            counter: vec![0; shape.len()],
            step_sizes,
            chunk_size,
            dead: num_elements == 0 || chunk_size == 0,
        }
    }

    fn linear_index(&self) -> usize {
        self.counter
            .iter()
            .zip(self.strides.iter())
            .fold(self.offset, |acc, (x, y)| acc + x * y)
    }
}

impl<'a, T> Iterator for StridedChunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.dead {
            return None;
        }
        let data = self.data;
        let index = self.linear_index();
        let chunk = &data[index..index + self.chunk_size];

        for ((digit, step_size), bound) in self
            .counter
            .iter_mut()
            .zip(self.step_sizes.iter())
            .zip(self.shape.iter())
            .rev()
        {
            if *digit + step_size >= *bound {
                *digit = 0;
            } else {
                *digit += step_size;
                return Some(chunk);
            }
        }

        self.dead = true;
        Some(chunk)
    }
}
